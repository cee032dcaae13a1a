//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_pixel_layout() {
    assert_eq!(daub::pack_rgba(255, 0, 0, 255), 0xFF00_00FF);
    assert_eq!(daub::parse_hex("#ff0000").unwrap(), 0xFF00_00FF);
}

#[test]
fn readme_fill_canvas() {
    let mut canvas = vec![0u32; 4];
    daub::fill_canvas(2, 2, &mut canvas, 255, 0, 0, 255).unwrap();
    assert_eq!(canvas, [0xFF00_00FF; 4]);
}

#[test]
fn readme_bounds() {
    use daub::FillError;

    let mut small = vec![0u32; 10];
    assert_eq!(
        daub::fill_canvas(-1, 5, &mut small, 0, 0, 0, 0),
        Err(FillError::NegativeDimension)
    );
    assert_eq!(
        daub::fill_canvas(1000, 1000, &mut small, 0, 0, 0, 0),
        Err(FillError::OutOfBounds)
    );
    assert_eq!(small, [0; 10]);
}

#[test]
fn readme_add_helper() {
    assert_eq!(daub::add(250, 10), 4);
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() {
    use daub::typed_rgb;
    use rgb::Rgba;

    let mut pixels: Vec<Rgba<u8>> = vec![Rgba::new(0, 0, 0, 0); 100];
    typed_rgb::fill_rgba(&mut pixels, Rgba::new(255, 0, 128, 255));
    assert_eq!(pixels[0], Rgba::new(255, 0, 128, 255));
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use daub::img;

    let mut canvas = img::new_canvas(640, 480, 0);
    img::clear_img(&mut canvas);
    img::fill_rect(&mut canvas, 0, 0, 320, 240, daub::OPAQUE_BLACK).unwrap();
    assert_eq!(canvas.width(), 640);
    assert_eq!(canvas.buf()[0], daub::OPAQUE_BLACK);
    assert_eq!(canvas.buf()[320], daub::OPAQUE_WHITE);
}
