use std::fs;

use pixcollage::codec::{read_file, write_file, Decoder, Encoder, ImageCodec, OutputFormat};
use pixcollage::config::{CollageConfig, VariantSpec};
use pixcollage::pipeline;
use pixcollage::transform::{blur, flip, greenscreen, mirror, shrink};
use pixcollage::util::SequenceSource;
use pixcollage::{compose, Axis, Channel, Color, PixelBuffer, RasterError, Rng};

fn scene(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn(w, h, |x, y| {
        Color::new((x * 255 / w) as u8, (y * 255 / h) as u8, ((x ^ y) & 0xFF) as u8)
    })
    .unwrap()
}

#[test]
fn test_files_through_pipeline() {
    let dir = std::env::temp_dir().join(format!("pixcollage-it-{}", std::process::id()));
    let codec = ImageCodec::new(OutputFormat::Png);
    let fg_path = dir.join("image1.png");
    let bg_path = dir.join("image2.png");
    write_file(&fg_path, &scene(60, 40), &codec).unwrap();
    write_file(&bg_path, &PixelBuffer::blank(25, 25, Color::BLUE).unwrap(), &codec).unwrap();

    let fg = read_file(&fg_path, &codec).unwrap();
    let bg = read_file(&bg_path, &codec).unwrap();
    assert_eq!(fg, scene(60, 40));

    let config = CollageConfig {
        seed: Some(2024),
        sample_dir: Some(dir.join("filter-images")),
        ..CollageConfig::default()
    };
    let out = pipeline::run(&fg, &bg, &config, &mut Rng::new(2024)).unwrap();
    assert_eq!(out.collage.dimensions(), (60, 40));

    let stamps: Vec<&PixelBuffer> = out.variants.iter().map(|v| &v.buffer).collect();
    for cx in 0..5 {
        for cy in 0..5 {
            let cell = PixelBuffer::from_fn(12, 8, |x, y| {
                out.collage.get(cx * 12 + x, cy * 8 + y).unwrap()
            })
            .unwrap();
            assert!(
                stamps.iter().any(|s| **s == cell),
                "cell ({}, {}) is not one of the variants",
                cx,
                cy
            );
        }
    }

    let written = pipeline::write_samples(&out.samples, dir.join("filter-images").as_path(), &codec)
        .unwrap();
    assert_eq!(written.len(), 6);
    assert!(written.iter().all(|p| p.exists()));

    let collage_path = dir.join("image3.png");
    write_file(&collage_path, &out.collage, &codec).unwrap();
    assert_eq!(codec.decode(&fs::read(&collage_path).unwrap()).unwrap(), out.collage);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_boundary_asymmetry_on_same_input() {
    let px = PixelBuffer::blank(3, 3, Color::new(100, 10, 220)).unwrap();
    let bg = PixelBuffer::blank(1, 1, Color::BLACK).unwrap();
    let filtered = pixcollage::transform::channel_filter(&px, Channel::Red, 100);
    let keyed = greenscreen(&px, Channel::Red, 100, &bg);
    assert_eq!(filtered.get(1, 1).unwrap(), Color::new(110, 110, 110));
    assert_eq!(keyed.get(1, 1).unwrap(), Color::new(100, 10, 220));
}

#[test]
fn test_operator_properties() {
    let img = scene(9, 7);
    assert_eq!(flip(&flip(&img, Axis::Horizontal), Axis::Horizontal), img);
    assert_eq!(flip(&flip(&img, Axis::Vertical), Axis::Vertical), img);
    assert_eq!(shrink(&img, 1).unwrap(), img);

    let wide = mirror(&img, Axis::Horizontal).unwrap();
    assert_eq!(wide.dimensions(), (18, 7));
    let flipped = flip(&img, Axis::Horizontal);
    for y in 0..7 {
        assert_eq!(&wide.row(y).unwrap()[9..], flipped.row(y).unwrap());
    }

    let blurred = blur(&img);
    assert_eq!(blurred.row(0).unwrap(), img.row(0).unwrap());
    assert_eq!(blurred.row(6).unwrap(), img.row(6).unwrap());
}

#[test]
fn test_compose_with_scripted_source() {
    let a = PixelBuffer::blank(2, 2, Color::RED).unwrap();
    let b = PixelBuffer::blank(2, 2, Color::GREEN).unwrap();
    let mut seq = SequenceSource::new(vec![1, 1, 1, 1]).unwrap();
    let out = compose(&[a, b.clone()], 2, &mut seq).unwrap();
    assert!(out.as_slice().iter().all(|&c| c == Color::GREEN));

    let odd = PixelBuffer::blank(3, 2, Color::RED).unwrap();
    assert!(matches!(
        compose(&[b, odd], 2, &mut Rng::new(1)),
        Err(RasterError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_custom_variant_list() {
    let config = CollageConfig::from_json(
        r#"{
            "grid_size": 2,
            "shrink_scale": 2,
            "variants": [
                {"op": "sepia"},
                {"op": "greenscreen", "channel": "blue", "intensity": 50}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(config.variants[0], VariantSpec::Sepia);
    let out = pipeline::run(
        &scene(8, 6),
        &scene(4, 4),
        &config,
        &mut Rng::new(5),
    )
    .unwrap();
    assert_eq!(out.variants.len(), 2);
    assert_eq!(out.collage.dimensions(), (8, 6));
    assert_eq!(ImageCodec::default().extension(), "png");
}
