//! Property-based tests for the pagination engine.
//!
//! This module uses proptest to verify:
//! - The offset never goes negative, whatever the move sequence
//! - The offset stays a multiple of the page size while the size is fixed
//! - Page numbers are 1-based and follow the offset
//! - A non-positive configured limit never yields a zero page size

use std::sync::Arc;

use proptest::prelude::*;
use tygenie_client::{ActivityLogger, ParamOverrides, QueryState};
use tygenie_config::{Settings, SettingsProvider};

fn query_state(limit: Option<i64>) -> QueryState {
    let mut settings = Settings::default();
    settings.tygenie.alerts.limit = limit;
    let provider: Arc<dyn SettingsProvider> = Arc::new(settings);
    QueryState::new(provider.clone(), ActivityLogger::new(provider))
}

proptest! {
    #[test]
    fn prop_offset_tracks_moves(limit in 1i64..200, moves in prop::collection::vec(any::<bool>(), 0..50)) {
        let mut state = query_state(Some(limit));
        let step = limit as u64;
        let mut expected: u64 = 0;

        for forward in moves {
            let params = if forward {
                expected += step;
                state.next_page()
            } else {
                expected = expected.saturating_sub(step);
                state.previous_page()
            };
            prop_assert_eq!(params.offset, expected);
            prop_assert_eq!(state.offset(), expected);
            prop_assert_eq!(params.offset % step, 0);
            prop_assert_eq!(state.current_page_number(), expected / step + 1);
        }
    }

    #[test]
    fn prop_page_size_never_zero(limit in proptest::option::of(-1000i64..1000)) {
        let state = query_state(limit);
        prop_assert!(state.limit() > 0);
        if let Some(l) = limit.filter(|l| *l > 0) {
            prop_assert_eq!(u64::from(state.limit()), l as u64);
        }
    }

    #[test]
    fn prop_overrides_win(offset in any::<u32>(), query in "[a-z:]{0,20}") {
        let mut state = query_state(None);
        let params = state.get(
            None,
            ParamOverrides::new()
                .with_offset(u64::from(offset))
                .with_query(query.clone()),
        );
        prop_assert_eq!(params.offset, u64::from(offset));
        prop_assert_eq!(params.query, query);
        prop_assert_eq!(state.offset(), 0);
    }
}
