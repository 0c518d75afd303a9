/// A closed enumeration persisted as its literal string value.
///
/// `as_str` must agree with the serde representation; the loosely-typed
/// validation and matrix paths parse raw JSON strings through it.
pub trait WireEnum: Sized + Copy + 'static {
    /// Wire name of the RiskItem field holding this enum.
    const FIELD: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Literal string value used in the durable encoding.
    fn as_str(self) -> &'static str;

    /// Parse a literal string value. Unknown values yield `None`.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// Comma-separated list of accepted values, for error messages.
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
