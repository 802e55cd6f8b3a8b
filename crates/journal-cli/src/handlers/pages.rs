use crate::cli::WindowArgs;
use crate::output;
use journal_core::{compute_window, PageMarker};
use serde::Serialize;

#[derive(Serialize)]
struct WindowResponse {
    active: usize,
    total: usize,
    max_direct: usize,
    markers: Vec<PageMarker>,
}

/// Echoes the clamped inputs the markers were computed from.
pub fn handle_window(args: WindowArgs) -> anyhow::Result<()> {
    let total = args.total.max(1);
    let active = args.active.clamp(1, total);
    let markers = compute_window(active, total, args.max_direct);
    output::output_success(WindowResponse {
        active,
        total,
        max_direct: args.max_direct,
        markers,
    })
}
