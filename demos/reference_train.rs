use cycloid::prelude::*;

fn main() -> anyhow::Result<()> {
    let form: GearForm<f64> = compute_form(0.13, 17, 112)?;
    println!("{}", serde_json::to_string_pretty(&form)?);

    let wheel = form.wheel_profile(None)?;
    let pinion = form.pinion_profile(None)?;
    for (name, profile) in [("wheel", &wheel), ("pinion", &pinion)] {
        let outlines = profile.outline_line_strings(8);
        let points: usize = outlines.iter().map(|outline| outline.0.len()).sum();
        println!(
            "{}: {} teeth at ({:.5}, {:.5}), {} outline points",
            name,
            profile.tooth_count(),
            profile.center().x,
            profile.center().y,
            points
        );
    }
    Ok(())
}
