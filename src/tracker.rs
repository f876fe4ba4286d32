//! Location Tracker
//!
//! Feeds browser position fixes through the distance gate and commits the
//! ones that moved more than 10 m as both the current location and the
//! view center.

use leptos::prelude::*;
use leptos_geolocation::{
    current_position, use_watch_position, DistanceGate, GeoError, LatLng, COMMIT_THRESHOLD_M,
};

use crate::console::{log_error, log_info, GEO};
use crate::context::MapContext;
use crate::store::{store_set_location, AppStateStoreFields, AppStore};

/// Run a fix through the gate. A committed fix becomes both the current
/// location and the view center, and clears the error line.
///
/// Returns the committed fix, or `None` if it was discarded (or the gate was
/// already disposed).
pub fn commit_fix(
    ctx: MapContext,
    store: AppStore,
    gate: StoredValue<DistanceGate>,
    fix: LatLng,
) -> Option<LatLng> {
    let committed = gate.try_update_value(|g| g.offer(fix)).flatten()?;
    store_set_location(&store, committed);
    ctx.recenter(committed);
    ctx.geo_error.set(None);
    Some(committed)
}

/// Start tracking for the lifetime of the calling component.
///
/// Errors from the position source are logged and shown under the map;
/// tracking carries on with the next fix.
pub fn use_location_tracker(ctx: MapContext, store: AppStore) {
    let gate = StoredValue::new(
        DistanceGate::new(COMMIT_THRESHOLD_M).with_committed(store.location().get_untracked()),
    );

    let on_fix = move |next: LatLng| {
        if let Some(committed) = commit_fix(ctx, store, gate, next) {
            log_info(
                GEO,
                &format!("location committed: {:.6}, {:.6}", committed.lat, committed.lng),
            );
        }
    };

    let on_error = move |err: GeoError| {
        log_error(GEO, &format!("Error fetching geolocation: {}", err));
        let _ = ctx.geo_error.try_set(Some(err.to_string()));
    };

    // Initial fix, then continuous updates; both go through the same gate
    if let Err(e) = current_position(on_fix, on_error) {
        on_error(e);
    }
    match use_watch_position(on_fix, on_error) {
        Ok(id) => {
            log_info(GEO, &format!("watching position (id {})", id));
            on_cleanup(|| log_info(GEO, "position watch cleared"));
        }
        Err(e) => on_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppState;
    use reactive_stores::Store;

    fn at(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    fn setup() -> (MapContext, AppStore, StoredValue<DistanceGate>) {
        let store = Store::new(AppState::new());
        let (token, _) = signal(None);
        let ctx = MapContext::new(None, token);
        let gate = StoredValue::new(DistanceGate::new(COMMIT_THRESHOLD_M));
        (ctx, store, gate)
    }

    #[test]
    fn test_first_fix_sets_location_and_center() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, store, gate) = setup();
            ctx.geo_error.set(Some("Position unavailable".to_string()));

            let fix = at(37.5, 127.0);
            assert_eq!(commit_fix(ctx, store, gate, fix), Some(fix));
            assert_eq!(store.location().get_untracked(), Some(fix));
            assert_eq!(ctx.center.get_untracked(), Some(fix));
            assert_eq!(ctx.geo_error.get_untracked(), None);
        });
    }

    #[test]
    fn test_jitter_leaves_location_center_and_error() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, store, gate) = setup();
            let start = at(37.5, 127.0);
            commit_fix(ctx, store, gate, start);
            ctx.geo_error.set(Some("Timed out".to_string()));

            // ~1.1 m north
            assert_eq!(commit_fix(ctx, store, gate, at(37.50001, 127.0)), None);
            assert_eq!(store.location().get_untracked(), Some(start));
            assert_eq!(ctx.center.get_untracked(), Some(start));
            assert_eq!(ctx.geo_error.get_untracked(), Some("Timed out".to_string()));
        });
    }

    #[test]
    fn test_movement_beyond_threshold_moves_both() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, store, gate) = setup();
            commit_fix(ctx, store, gate, at(37.5, 127.0));

            // ~22.2 m north
            let moved = at(37.5002, 127.0);
            assert_eq!(commit_fix(ctx, store, gate, moved), Some(moved));
            assert_eq!(store.location().get_untracked(), Some(moved));
            assert_eq!(ctx.center.get_untracked(), Some(moved));
        });
    }

    #[test]
    fn test_gate_seeded_from_store_discards_jitter() {
        let owner = Owner::new();
        owner.with(|| {
            let (ctx, store, _) = setup();
            let known = at(37.5, 127.0);
            store_set_location(&store, known);
            let gate = StoredValue::new(
                DistanceGate::new(COMMIT_THRESHOLD_M)
                    .with_committed(store.location().get_untracked()),
            );

            assert_eq!(commit_fix(ctx, store, gate, at(37.50001, 127.0)), None);
            assert_eq!(ctx.center.get_untracked(), None);
        });
    }
}
