use chrono::Utc;
use rand::Rng;

use crate::portfolio::domain::entities::RecordId;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `<unix-millis>-<9 base36 chars>`, e.g. `1718000000000-k3j9x0a1b`.
pub fn generate_record_id() -> RecordId {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    RecordId::from(format!("{}-{}", Utc::now().timestamp_millis(), suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_has_timestamp_and_base36_suffix() {
        let id = generate_record_id();
        let (millis, suffix) = id.as_str().split_once('-').unwrap();

        assert!(millis.parse::<i64>().unwrap() > 0);
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_generated_in_a_burst_do_not_collide() {
        let ids: HashSet<_> = (0..500).map(|_| generate_record_id()).collect();
        assert_eq!(ids.len(), 500);
    }
}
