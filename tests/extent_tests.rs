// Host-side tests for offscreen target sizing.

mod extent {
    include!("../src/render/extent.rs");
}

use extent::TargetExtents;

#[test]
fn bloom_targets_run_at_half_resolution() {
    let ext = TargetExtents::for_canvas(1920, 1080);
    assert_eq!(ext.full, (1920, 1080));
    assert_eq!(ext.bloom, (960, 540));
    assert_eq!(ext.bloom_resolution(), [960.0, 540.0]);
}

#[test]
fn odd_sizes_round_down_for_bloom() {
    let ext = TargetExtents::for_canvas(801, 601);
    assert_eq!(ext.bloom, (400, 300));
    // shader resolution matches the texture it samples, not canvas / 2
    assert_eq!(ext.bloom_resolution(), [400.0, 300.0]);
}

#[test]
fn degenerate_canvas_keeps_every_target_non_empty() {
    for (w, h) in [(0, 0), (1, 1), (0, 720), (1280, 1)] {
        let ext = TargetExtents::for_canvas(w, h);
        assert!(ext.full.0 >= 1 && ext.full.1 >= 1);
        assert!(ext.bloom.0 >= 1 && ext.bloom.1 >= 1);
    }
}
