//! 分页的纯计算部分
//!
//! 列表在前端整页拉取后本地分页。页码从 0 起；过滤把数据
//! 缩短后当前页可能越界，展示前一律先 clamp。

pub const PAGE_SIZE: usize = 10;

/// 总页数，空列表也算一页
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// 把页码夹回合法区间
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// 当前页的半开区间 `[start, end)`
pub fn page_bounds(page: usize, total: usize, page_size: usize) -> (usize, usize) {
    let page = clamp_page(page, total, page_size);
    let start = page * page_size;
    (start, (start + page_size).min(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_clamp_after_filter_shrinks_list() {
        // 第 3 页看着 25 条数据，过滤后只剩 4 条
        assert_eq!(clamp_page(2, 4, 10), 0);
        assert_eq!(clamp_page(2, 25, 10), 2);
        assert_eq!(clamp_page(9, 0, 10), 0);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(0, 25, 10), (0, 10));
        assert_eq!(page_bounds(2, 25, 10), (20, 25));
        assert_eq!(page_bounds(5, 25, 10), (20, 25));
        assert_eq!(page_bounds(0, 0, 10), (0, 0));
    }
}
