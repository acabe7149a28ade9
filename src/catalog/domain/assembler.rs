use std::cmp::Ordering;
use crate::books::domain::filter::BookFilter;
use crate::books::domain::model::BookEntity;
use crate::core::library::BookOrder;

// Orders the matched books, then applies offset and limit. Expects a validated filter.
pub fn assemble(mut books: Vec<BookEntity>, filter: &BookFilter) -> Vec<BookEntity> {
    books.sort_by(|a, b| compare(filter.order, a, b));
    let offset = usize::try_from(filter.offset).unwrap_or(0);
    let limit = match filter.limit {
        Some(limit) => usize::try_from(limit).unwrap_or(0),
        None => usize::MAX,
    };
    books.into_iter().skip(offset).take(limit).collect()
}

fn compare(order: BookOrder, a: &BookEntity, b: &BookEntity) -> Ordering {
    let primary = match order {
        BookOrder::ByLastAdding => b.sequence.cmp(&a.sequence),
        BookOrder::ByName => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        BookOrder::ByPrice => a.price.total_cmp(&b.price),
    };
    primary.then_with(|| a.book_id.cmp(&b.book_id))
}

#[cfg(test)]
mod tests {
    use crate::books::domain::filter::BookFilter;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::assembler::assemble;
    use crate::core::library::BookOrder;

    fn books(count: i64) -> Vec<BookEntity> {
        (1..=count).map(|i| {
            let mut book = BookEntity::new(format!("title_{}", i).as_str(), 1, 1);
            book.book_id = Some(i);
            book.sequence = i as u64;
            book
        }).collect()
    }

    fn ids(books: &[BookEntity]) -> Vec<i64> {
        books.iter().filter_map(|b| b.book_id).collect()
    }

    #[tokio::test]
    async fn test_should_order_by_last_adding() {
        let res = assemble(books(5), &BookFilter::default());
        assert_eq!(vec![5, 4, 3, 2, 1], ids(&res));
    }

    #[tokio::test]
    async fn test_should_break_ties_by_ascending_id() {
        let mut all = books(3);
        for book in all.iter_mut() {
            book.sequence = 1;
        }
        all.reverse();
        let res = assemble(all, &BookFilter::default());
        assert_eq!(vec![1, 2, 3], ids(&res));
    }

    #[tokio::test]
    async fn test_should_take_latest_with_limit() {
        let res = assemble(books(5), &BookFilter::default().with_limit(Some(4)));
        assert_eq!(vec![5, 4, 3, 2], ids(&res));
    }

    #[tokio::test]
    async fn test_should_skip_offset_before_limit() {
        let res = assemble(books(5), &BookFilter::default().with_offset(1).with_limit(Some(2)));
        assert_eq!(vec![4, 3], ids(&res));
    }

    #[tokio::test]
    async fn test_should_return_empty_when_offset_exceeds_matches() {
        let res = assemble(books(3), &BookFilter::default().with_offset(10));
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn test_should_follow_length_formula() {
        for matched in 0..6i64 {
            for offset in 0..7i64 {
                for limit in 0..7i64 {
                    let filter = BookFilter::default().with_offset(offset).with_limit(Some(limit));
                    let res = assemble(books(matched), &filter);
                    let expected = limit.min(matched - offset).max(0) as usize;
                    assert_eq!(expected, res.len(), "matched={} offset={} limit={}", matched, offset, limit);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_should_order_by_name_ignoring_case() {
        let mut all = books(3);
        all[0].name = "charlie".to_string();
        all[1].name = "Alpha".to_string();
        all[2].name = "bravo".to_string();
        let res = assemble(all, &BookFilter::default().with_order(BookOrder::ByName));
        assert_eq!(vec![2, 3, 1], ids(&res));
    }

    #[tokio::test]
    async fn test_should_order_by_price() {
        let mut all = books(3);
        all[0].price = 30.0;
        all[1].price = 10.0;
        all[2].price = 10.0;
        let res = assemble(all, &BookFilter::default().with_order(BookOrder::ByPrice));
        assert_eq!(vec![2, 3, 1], ids(&res));
    }
}
