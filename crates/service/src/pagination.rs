//! Offset/limit pagination for list endpoints.

/// Page size used when the client does not ask for one.
pub const DEFAULT_LIMIT: u64 = 100;
/// Larger requests are clamped to this, not rejected.
pub const MAX_LIMIT: u64 = 100;
/// SQL backends bind OFFSET as a signed 64-bit integer.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Normalized pagination window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// rows to skip
    pub offset: u64,
    /// rows to return at most
    pub limit: u64,
}

impl Page {
    /// Apply defaults, clamp `limit` to [`MAX_LIMIT`] and `offset` to
    /// [`MAX_OFFSET`]. An offset that large is past every row anyway.
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).min(MAX_OFFSET),
            limit: limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self { Self::new(None, None) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_full_page() {
        let d = Page::default();
        assert_eq!(d, Page { offset: 0, limit: 100 });
    }

    #[test]
    fn limit_is_clamped_not_rejected() {
        assert_eq!(Page::new(Some(5), Some(1000)), Page { offset: 5, limit: 100 });
    }

    #[test]
    fn offset_is_clamped_to_signed_range() {
        assert_eq!(Page::new(Some(u64::MAX), None).offset, MAX_OFFSET);
        assert_eq!(Page::new(Some(MAX_OFFSET + 1), None).offset, MAX_OFFSET);
        assert_eq!(Page::new(Some(7), None).offset, 7);
    }

    #[test]
    fn small_limits_pass_through() {
        assert_eq!(Page::new(None, Some(0)).limit, 0);
        assert_eq!(Page::new(None, Some(3)).limit, 3);
    }
}
