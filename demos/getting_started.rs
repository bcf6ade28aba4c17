//! Walk through distances, boundaries and geohashes.
//!
//! Run with `RUST_LOG=debug cargo run --example getting_started` to see
//! the lenient fallbacks being reported.

use geoutil::geohash;
use geoutil::prelude::*;
use geoutil::spatial::{fast_get_distance, get_distance_haversine};

fn main() -> Result<()> {
    env_logger::init();

    let kuala_lumpur = Point::new(3.096249444382203, 101.53713780926184);
    let singapore = Point::new(1.3361333233860981, 103.83548216216576);

    println!("=== Distances ===");
    println!("from {} to {}", kuala_lumpur, singapore);
    println!("law of cosines:  {}", kuala_lumpur.distance_to(&singapore));
    println!("haversine:       {}", get_distance_haversine(&kuala_lumpur, &singapore));
    println!("equirectangular: {}", fast_get_distance(&kuala_lumpur, &singapore));

    let d = distance_between(&kuala_lumpur, &singapore, DistanceFormula::Haversine);
    println!(
        "= {:.3} km, {:.3} mi, {:.3} nmi",
        d.kilometers(),
        d.miles(),
        d.nautical_miles()
    );

    println!("\n=== Boundary ===");
    let rect = get_boundary(&kuala_lumpur, 10.0 * METER);
    println!("10 m around {}: {}", kuala_lumpur, rect);
    for corner in rect.corners() {
        println!("  corner {} is {}", corner, kuala_lumpur.distance_to(&corner));
    }

    println!("\n=== Geohash ===");
    let beijing = Point::new(39.925746, 116.599831);
    for precision in [1, 4, 8, 12, 22] {
        let hash = geohash::encode(&beijing, precision);
        println!("{:>2}: {:<22} -> {}", precision, hash, geohash::decode(&hash));
    }

    // Lenient by default, strict on request.
    println!("precision 0 falls back to {}", geohash::encode(&beijing, 0));
    match geohash::try_encode(&beijing, 0) {
        Ok(hash) => println!("unexpected: {}", hash),
        Err(e) => println!("strict encode: {}", e),
    }

    let geo = GeoUtil::builder()
        .distance_formula(DistanceFormula::Equirectangular)
        .geohash_precision(7)
        .strict(true)
        .build()?;
    println!("\nconfigured: {}", geo.config().to_json()?);
    println!("cell of {}: {}", beijing, geo.decode_bounds(&geo.encode(&beijing)?)?);

    let outside = Point::new(91.0, 0.0);
    println!("{} valid? {}", outside, is_valid_point(&outside));
    if let Err(e) = geo.encode(&outside) {
        println!("strict toolkit: {}", e);
    }

    Ok(())
}
