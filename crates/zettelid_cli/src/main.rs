//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `zettelid_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("zettelid_core ping={}", zettelid_core::ping());
    println!("zettelid_core version={}", zettelid_core::core_version());

    // Tiny end-to-end probe over the public surface.
    let sample = ["10/A.2/B", "2/A.3/B", "A1/A.10", "1/A.1/A"]
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>();
    println!("sorted={}", zettelid_core::sort_ids(&sample).join(","));
    println!(
        "next_child_of_12={}",
        zettelid_core::next_child_id("12", &[])
    );
}
