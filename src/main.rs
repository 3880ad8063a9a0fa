use geocell::{GeoBox, GeohashConfig, GeohashError, LatLng};

fn print_corners(bbox: &GeoBox) {
    for corner in bbox.corners() {
        println!("{}", corner);
    }
}

fn main() -> Result<(), GeohashError> {
    env_logger::init();

    let config = match std::env::var("GEOCELL_CONFIG") {
        Ok(json) => GeohashConfig::from_json(&json)?,
        Err(_) => GeohashConfig::default(),
    };

    let latlng = LatLng::new(39.9793796465, 116.3397989834);

    let base = config.base_code(&latlng)?;
    println!("base_code: {}", base);

    let block = config.neighborhood(&latlng)?;
    for code in block.codes() {
        println!("box_code: {}", code);
        print_corners(&code.decode());
        println!("{}", "*".repeat(60));
    }

    println!("box_bounder:");
    print_corners(&block.bounding_box());

    Ok(())
}
