//! Builds a small axisymmetric chamber and prints boundary queries.
//!
//! Usage:
//! ```text
//! cargo run --example inspect                    # RZ domain
//! cargo run --example inspect -- xy              # planar domain
//! RUST_LOG=boundline=debug cargo run --example inspect
//! ```

use boundline::boundary::{BoundaryKind, BoundaryStore};
use boundline::math::Point2;
use boundline::operations::creation::{JoinBoundaries, MakeBoundary};
use boundline::operations::modification::SplitSpline;
use boundline::operations::query::{Area, IsInternal, SplineIntersect};
use boundline::operations::sampling::RandomPos;
use boundline::{DomainType, Spline};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> boundline::Result<()> {
    // Default: WARN for everything, INFO for boundline.
    // Override with RUST_LOG env var (e.g. RUST_LOG=boundline=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("inspect=info".parse().unwrap_or_default())
        .add_directive("boundline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let domain: DomainType = std::env::args()
        .nth(1)
        .map_or(Ok(DomainType::Rz), |arg| arg.parse())?;

    // Counter-clockwise chamber: flat bottom, curved top sealed on the axis.
    let mut store = BoundaryStore::new();
    let bottom = MakeBoundary::new("bottom", BoundaryKind::Dirichlet, "M 0 0 L 2 0 L 2 1")
        .execute(&mut store)?;
    let dome = MakeBoundary::new("dome", BoundaryKind::Dirichlet, "M bottom:LAST S 1.5 1.8 0.5 1.6")
        .execute(&mut store)?;
    let axis = MakeBoundary::new("axis", BoundaryKind::Symmetry, "M dome:LAST L 0 1.6 L bottom:FIRST")
        .execute(&mut store)?;

    let outline = JoinBoundaries::new(vec![bottom, dome, axis]).execute(&store)?;
    print_outline(&outline, domain)?;

    let probe = Spline::line(Point2::new(-1.0, 1.2), Point2::new(3.0, 1.2));
    match SplineIntersect::new().execute(&outline, &probe)? {
        Some(hit) => println!("probe at z = 1.2 first crosses t = {:.4}", hit.t),
        None => println!("probe at z = 1.2 misses the outline"),
    }

    for point in [Point2::new(1.0, 0.5), Point2::new(1.9, 1.7), Point2::new(4.0, 0.5)] {
        let inside = IsInternal::new(point).execute_region(&store);
        println!("({:.2}, {:.2}) internal: {inside}", point.x, point.y);
    }

    let mut rng = StdRng::seed_from_u64(7);
    let sampler = RandomPos::new(domain);
    for _ in 0..3 {
        let p = sampler.execute(&outline, &mut rng)?;
        println!("sample ({:.4}, {:.4})", p.x, p.y);
    }
    Ok(())
}

fn print_outline(outline: &Spline, domain: DomainType) -> boundline::Result<()> {
    let bounds = outline.bounding_box();
    println!("domain {domain}");
    println!(
        "{} segments, length {:.4}, box [{:.2}, {:.2}] - [{:.2}, {:.2}]",
        outline.num_segments(),
        outline.length(),
        bounds.min.x,
        bounds.min.y,
        bounds.max.x,
        bounds.max.y
    );
    println!("area {:.4}", Area::new(domain).execute(outline)?);

    let nodes = SplitSpline::new(outline.num_segments() * 3 + 1).execute(outline)?;
    let formatted: Vec<String> = nodes.iter().map(|t| format!("{t:.3}")).collect();
    println!("resampled t: {}", formatted.join(" "));
    Ok(())
}
