//! Basic usage example for interval-cubic-splines

use interval_cubic_splines::prelude::*;

fn main() -> SplineResult<()> {
    println!("=== Natural Cubic Spline Example ===\n");

    let mut reader = DecimalReader::new()?;
    let x_text = ["0", "1", "2", "3"];
    let y_text = ["0", "1", "0", "1"];

    // Example 1: Round-to-nearest extended precision
    println!("Point spline:");
    let xs = x_text
        .iter()
        .map(|t| reader.parse_point(t))
        .collect::<SplineResult<Vec<_>>>()?;
    let ys = y_text
        .iter()
        .map(|t| reader.parse_point(t))
        .collect::<SplineResult<Vec<_>>>()?;
    let spline = PointSpline::new(&xs, &ys)?;

    for q in ["-0.5", "0.5", "1.5", "2.25", "3"] {
        let evaluation = spline.evaluate(&reader.parse_point(q)?)?;
        println!(
            "  S({q}) = {}  (segment {})",
            evaluation.value, evaluation.segment
        );
    }

    // Example 2: Whole-line coefficients for reporting
    println!("\nGlobal coefficients a0 + a1·x + a2·x² + a3·x³:");
    for (j, global) in spline.global_coefficients().enumerate() {
        println!(
            "  segment {j}: {}, {}, {}, {}",
            global.a0, global.a1, global.a2, global.a3
        );
    }

    // Example 3: Nodes that are not exactly representable
    println!("\nInterval spline from outward-rounded literals:");
    let xs = ["0.1", "0.7", "1.3", "1.9"]
        .iter()
        .map(|t| reader.parse_interval(t))
        .collect::<SplineResult<Vec<_>>>()?;
    let ys = ["0.3", "-0.2", "0.4", "0.1"]
        .iter()
        .map(|t| reader.parse_interval(t))
        .collect::<SplineResult<Vec<_>>>()?;
    let spline = IntervalSpline::new(&xs, &ys)?;
    let query = reader.parse_interval("1")?;
    let evaluation = spline.evaluate(&query)?;
    println!("  S({query}) = {}", evaluation.value);
    println!("  width = {}", evaluation.value.width());

    // Example 4: Explicit bounds on uncertain measurements
    println!("\nInterval spline from explicit bounds:");
    let xs = [("0", "0.01"), ("1", "1.01"), ("2", "2.01")]
        .iter()
        .map(|(lo, hi)| reader.parse_bounds(lo, hi))
        .collect::<SplineResult<Vec<_>>>()?;
    let ys = [("0.9", "1.1"), ("1.9", "2.1"), ("0.9", "1.1")]
        .iter()
        .map(|(lo, hi)| reader.parse_bounds(lo, hi))
        .collect::<SplineResult<Vec<_>>>()?;
    let spline = IntervalSpline::new(&xs, &ys)?;
    let evaluation = spline.evaluate(&reader.parse_bounds("0.4", "0.6")?)?;
    println!("  S([0.4, 0.6]) = {}", evaluation.value);

    // Example 5: Error handling
    println!("\nError handling:");
    let straddling = reader.parse_bounds("0.5", "1.5")?;
    match spline.evaluate(&straddling) {
        Ok(evaluation) => println!("  Result: {}", evaluation.value),
        Err(e) => println!("  Error: {}", e),
    }
    match reader.parse_point("1.2.3") {
        Ok(value) => println!("  Result: {}", value),
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}
