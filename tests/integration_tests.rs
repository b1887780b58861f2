use geohash_any::prelude::*;
use std::thread;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_codec_roundtrip() {
    assert_eq!(base_n_encode(103063661257551), "Xbxg6yNP");
    assert_eq!(base_n_decode("Xbxg6yNP").unwrap(), 103063661257551);

    for n in (-5000..5000).step_by(7).chain([i128::MIN, i128::MAX, 0]) {
        assert_eq!(base_n_decode(&base_n_encode(n)).unwrap(), n);
    }
    assert_eq!(base_n_decode(""), Err(GeohashError::EmptyInput));
}

#[test]
fn test_encode_decode_roundtrip() {
    init_logging();

    let places = [
        (40.7128, -74.0060),
        (-33.8688, 151.2093),
        (64.1466, -21.9426),
        (0.0, 0.0),
        (-89.99, 179.99),
    ];

    for (lat, lon) in places {
        for chars in [2, 5, 8, 11] {
            let hash = geohash_encode_text(lat, lon, chars).unwrap();
            assert_eq!(hash.chars().count(), chars);

            let rect = Geohasher::default().decode_bbox(&hash, false).unwrap();
            assert!(rect.min().y <= lat && lat <= rect.max().y);
            assert!(rect.min().x <= lon && lon <= rect.max().x);

            // Center and half extent each lose under 1e-6 to truncation
            let bbox = geohash_decode(&hash, false).unwrap();
            assert!((bbox.lat - lat).abs() <= bbox.half_lat + 2e-6);
            assert!((bbox.lon - lon).abs() <= bbox.half_lon + 2e-6);

            let binary = geohash_encode(lat, lon, chars * 6).unwrap();
            assert_eq!(geohash_decode(&binary, true).unwrap(), bbox);
        }
    }
}

#[test]
fn test_binary_and_text_neighbors_agree() {
    let hasher = Geohasher::default();
    let text = geohash_encode_text(-23.5505, -46.6333, 6).unwrap();
    let binary = hasher.to_binary(&text).unwrap();

    let from_text = geohash_neighbors(&text, false, None).unwrap();
    let from_binary = geohash_neighbors(&binary, true, None).unwrap();

    for (direction, hash) in from_binary.iter() {
        assert_eq!(hasher.to_text(hash).unwrap(), from_text.get(direction));
    }

    let truncated = geohash_neighbors(&text, false, Some(3)).unwrap();
    let truncated_binary = geohash_neighbors(&binary, true, Some(18)).unwrap();
    for direction in Direction::ALL {
        assert_eq!(truncated.get(direction).len(), 3);
        assert_eq!(
            hasher.to_text(truncated_binary.get(direction)).unwrap(),
            truncated.get(direction)
        );
    }
}

#[test]
fn test_neighbors_surround_cell() {
    let hash = geohash_encode_text(48.8566, 2.3522, 7).unwrap();
    let cell = geohash_decode(&hash, false).unwrap();
    let nbrs = geohash_neighbors(&hash, false, None).unwrap();

    for (direction, neighbor) in nbrs.iter() {
        let other = geohash_decode(neighbor, false).unwrap();
        let d_lat = (other.lat - cell.lat) / (2.0 * cell.half_lat);
        let d_lon = (other.lon - cell.lon) / (2.0 * cell.half_lon);

        let (expected_lat, expected_lon) = match direction {
            Direction::North => (1.0, 0.0),
            Direction::NorthEast => (1.0, 1.0),
            Direction::East => (0.0, 1.0),
            Direction::SouthEast => (-1.0, 1.0),
            Direction::South => (-1.0, 0.0),
            Direction::SouthWest => (-1.0, -1.0),
            Direction::West => (0.0, -1.0),
            Direction::NorthWest => (1.0, -1.0),
        };
        assert!((d_lat - expected_lat).abs() < 0.5, "{} lat step", direction);
        assert!((d_lon - expected_lon).abs() < 0.5, "{} lon step", direction);

        // Stepping back the opposite way returns to the cell
        let hasher = Geohasher::default();
        assert_eq!(
            hasher
                .neighbor(neighbor, false, direction.opposite())
                .unwrap(),
            hash
        );
    }
}

#[test]
fn test_results_serialize_to_json() {
    let bbox = geohash_decode("Xbxg6yNP", false).unwrap();
    let json = serde_json::to_value(bbox).unwrap();
    assert_eq!(json["lat"], 83.345326);
    assert_eq!(json["lon"], -114.876748);

    let nbrs = geohash_neighbors("Xbxg6yNP", false, Some(4)).unwrap();
    let json = serde_json::to_string(&nbrs).unwrap();
    let parsed: Neighbors = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, nbrs);
    assert!(json.contains("\"ne\":\"Xbxj\""));
}

#[test]
fn test_rect_interop() {
    let hasher = Geohasher::default();
    let rect = hasher.decode_bbox("wA", false).unwrap();
    assert_eq!(rect.min().x, 0.0);
    assert_eq!(rect.min().y, 0.0);
    assert_eq!(rect.max().x, 5.625);
    assert_eq!(rect.max().y, 2.8125);

    let point = Point::new(2.0, 1.0);
    assert_eq!(hasher.encode_point(&point, 2).unwrap(), "wA");
}

#[test]
fn test_concurrent_use_of_shared_alphabet() {
    let handles: Vec<_> = (0..8i32)
        .map(|i| {
            thread::spawn(move || {
                let lat = -80.0 + f64::from(i) * 20.0;
                let lon = -170.0 + f64::from(i) * 40.0;
                let hash = geohash_encode_text(lat, lon, 8).unwrap();
                let bbox = geohash_decode(&hash, false).unwrap();
                (hash, bbox)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (hash, bbox) = handle.join().expect("worker panicked");
        let lat = -80.0 + i as f64 * 20.0;
        let lon = -170.0 + i as f64 * 40.0;
        assert_eq!(geohash_encode_text(lat, lon, 8).unwrap(), hash);
        assert!((bbox.lat - lat).abs() <= bbox.half_lat + 2e-6);
        assert!((bbox.lon - lon).abs() <= bbox.half_lon + 2e-6);
    }
}

#[test]
fn test_config_driven_engine() {
    let config = Config::from_json(r#"{ "symbols": "0123456789bcdefghjkmnpqrstuvwxyz" }"#)
        .expect("valid config");
    let alphabet = config.alphabet().unwrap();
    let hasher = Geohasher::new(&alphabet).unwrap();

    assert_eq!(hasher.bits_per_char(), 5);
    assert_eq!(hasher.encode_text(40.7128, -74.0060, 7).unwrap(), "dr5regw");
    assert_eq!(
        hasher.neighbors("dr5regw", false, Some(5)).unwrap().n,
        hasher.neighbor("dr5re", false, Direction::North).unwrap()
    );
}
