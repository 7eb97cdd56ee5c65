use crate::models::error::{Error, Result};

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// The slice of the id-ordered question list a page covers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64
}

impl PageWindow {
    pub fn for_page(page: i64) -> Result<PageWindow> {
        PageWindow::sized(page, QUESTIONS_PER_PAGE)
    }

    /// Pages are 1-based; anything below 1 is rejected rather than clamped.
    pub fn sized(page: i64, size: i64) -> Result<PageWindow> {
        if page < 1 {
            return Err(Error::InvalidArgument("page numbers start at 1"))
        }

        (page - 1)
            .checked_mul(size)
            .map(|offset| PageWindow {
                offset,
                limit: size
            })
            .ok_or(Error::InvalidArgument("page number too large"))
    }
}

/// A missing or unparseable page number means the first page.
pub fn page_or_first(page: Option<i64>) -> i64 {
    page.unwrap_or(1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn window_arithmetic() {
        assert_eq!(PageWindow::for_page(1).unwrap(), PageWindow { offset: 0, limit: 10 });
        assert_eq!(PageWindow::for_page(2).unwrap(), PageWindow { offset: 10, limit: 10 });
        assert_eq!(PageWindow::sized(4, 3).unwrap(), PageWindow { offset: 9, limit: 3 });
    }

    #[test]
    fn rejects_pages_below_one() {
        for page in [0, -1, i64::MIN] {
            assert!(matches!(PageWindow::for_page(page), Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn rejects_overflowing_offsets() {
        assert!(matches!(PageWindow::for_page(i64::MAX), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn defaults_to_first_page() {
        assert_eq!(page_or_first(None), 1);
        assert_eq!(page_or_first(Some(3)), 3);
    }
}
