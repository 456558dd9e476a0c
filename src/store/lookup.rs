use crate::model::{LookupKey, Record};

/// First record whose id matches `key`, in collection order.
pub fn find_by_id<'a, R: Record>(records: &'a [R], key: &LookupKey<'_>) -> Option<&'a R> {
    records.iter().find(|record| record.id().matches(key))
}
