//! Prints the results of each primitive operation.
//!
//! ```text
//! cargo run --example showcase
//! RUST_LOG=geoprim=debug cargo run --example showcase   # show degenerate-case fallbacks
//! ```

use geoprim::math::{distance, intersect, measure};
use geoprim::{cross_product, dot_product, Line, Plane, Point, Polygon, Result, EPSILON};

fn section(title: &str) {
    println!("\n{}\n  {title}\n{}", "-".repeat(50), "-".repeat(50));
}

fn points() -> Result<()> {
    section("points");
    let p1 = Point::new(1.0, 2.0, 3.0);
    let p2 = Point::new(4.0, 5.0, 6.0);
    println!("p1 = {p1:.2}, p2 = {p2:.2}");
    println!("p1 + p2 = {:.2}", p1 + p2);
    println!("p2 - p1 = {:.2}", p2 - p1);
    println!("p1 * 2.5 = {:.2}", p1 * 2.5);
    println!("p2 / 2 = {:.2}", p2.try_div(2.0)?);
    println!("|p1| = {:.2}", p1.magnitude());
    println!("p1 normalized = {:.2}", p1.normalized()?);
    println!("p1 . p2 = {:.2}", dot_product(p1, p2));
    println!("p1 x p2 = {:.2}", cross_product(p1, p2));
    Ok(())
}

fn lines() -> Result<()> {
    section("lines");
    let line1 = Line::new(Point::new(0.0, 0.0, 0.0), Point::new(3.0, 4.0, 0.0));
    let line2 = Line::new(Point::new(1.0, 1.0, 0.0), Point::new(4.0, 2.0, 0.0));
    println!("line1 = {line1:.2}, line2 = {line2:.2}");
    println!("length = {:.2}, direction = {:.2}", line1.length(), line1.direction()?);

    let q = Point::new(1.0, 2.0, 0.0);
    println!("distance to {q:.2} = {:.2}", line1.distance_to(q));
    println!("projection = {:.2}, reflection = {:.2}", line1.project(q), line1.reflect(q));
    println!("line1 crosses line2: {}", line1.intersects(&line2));
    let angle = line1.angle_with(&line2)?;
    println!("angle = {angle:.2} rad ({:.2} deg)", measure::radians_to_degrees(angle));

    let (p0, control, p1) = (
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.5, 2.0, 0.0),
        Point::new(3.0, 0.0, 0.0),
    );
    for i in 0..=5 {
        let t = f64::from(i) / 5.0;
        println!("bezier({t:.2}) = {:.2}", Line::bezier_quadratic(p0, control, p1, t));
    }
    Ok(())
}

fn planes() -> Result<()> {
    section("planes");
    let xy = Plane::from_points(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    )?;
    let raised = Plane::new(Point::new(0.0, 0.0, 1.0), Point::new(0.0, 0.0, 5.0))?;
    println!("xy = {xy:.2}\nraised = {raised:.2}");

    let q = Point::new(1.0, 1.0, 2.0);
    println!("signed distance to {q:.2} = {:.2}", xy.signed_distance_to(q));
    println!("projection = {:.2}, reflection = {:.2}", xy.project(q), xy.reflect(q));

    let line = Line::new(Point::new(1.0, 1.0, -1.0), Point::new(1.0, 1.0, 3.0));
    match xy.intersection_with(&line) {
        Some(hit) => println!("{line:.2} meets xy at {hit:.2}"),
        None => println!("{line:.2} has no unique intersection with xy"),
    }
    println!(
        "angle = {:.2} rad, parallel: {}",
        xy.angle_with(&raised),
        xy.is_parallel_to(&raised, EPSILON)
    );
    Ok(())
}

fn polygons() -> Result<()> {
    section("polygons");
    let mut square = Polygon::new();
    square.add_vertex(Point::new(0.0, 0.0, 0.0));
    square.add_vertex(Point::new(2.0, 0.0, 0.0));
    square.add_vertex(Point::new(2.0, 2.0, 0.0));
    square.add_vertex(Point::new(0.0, 2.0, 0.0));
    println!("square = {square:.2}");
    println!(
        "area = {:.2}, perimeter = {:.2}, centroid = {:.2}, convex: {}",
        square.area(),
        square.perimeter(),
        square.centroid()?,
        square.is_convex()
    );

    let scattered: Polygon = [(3.0, 1.0), (1.0, 1.0), (2.0, 2.0), (2.0, 3.0), (3.0, 3.0), (4.0, 2.0)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y, 0.0))
        .collect();
    println!("hull of {scattered:.2} = {:.2}", scattered.convex_hull());

    let bb = square.bounding_box();
    println!("bounding box = {:.2} .. {:.2}", bb.min, bb.max);
    Ok(())
}

fn utilities() -> Result<()> {
    section("utilities");
    let (p1, p2, p3, p4) = (
        Point::new(1.0, 2.0, 3.0),
        Point::new(4.0, 5.0, 6.0),
        Point::new(7.0, 8.0, 9.0),
        Point::new(1.0, 0.0, 0.0),
    );
    println!("distance = {:.2}", distance::point_to_point(p1, p2));
    println!("collinear: {}", measure::are_collinear(p1, p2, p3, EPSILON));
    println!("coplanar: {}", measure::are_coplanar(p1, p2, p3, p4, EPSILON));
    println!("triangle area = {:.2}", measure::triangle_area(p1, p2, p3));
    println!("tetrahedron volume = {:.2}", measure::tetrahedron_volume(p1, p2, p3, p4));

    let origin = Point::ZERO;
    let z0 = Plane::new(Point::new(0.0, 0.0, 1.0), origin)?;
    let y0 = Plane::new(Point::new(0.0, 1.0, 0.0), origin)?;
    let x0 = Plane::new(Point::new(1.0, 0.0, 0.0), origin)?;
    match intersect::plane_plane(&z0, &y0) {
        Some(line) => println!("z=0 and y=0 meet along {line:.2}"),
        None => println!("z=0 and y=0 are parallel"),
    }
    match intersect::three_planes(&z0, &y0, &x0) {
        Some(point) => println!("coordinate planes meet at {point:.2}"),
        None => println!("coordinate planes have no unique point"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    points()?;
    lines()?;
    planes()?;
    polygons()?;
    utilities()?;
    Ok(())
}
