/// Source of the reference domain list used for suffix repair and
/// nearest-domain correction. Order is significant: the first matching
/// entry wins, so implementations must not reorder or deduplicate.
pub trait ConfigProvider {
    fn domains(&self) -> Vec<String>;
}
