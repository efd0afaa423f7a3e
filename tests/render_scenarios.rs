use std::fs;
use std::path::PathBuf;

use mandel_explorer::{
    AnimationPlan, Colour, ColourSchemeKind, EscapeResult, ExportController, ExportRequest,
    FrameSinkError, FrameSinkPort, FractalParameters, ImageFilePresenter, ImageSize,
    JsonSidecarStore, MetadataError, MetadataStorePort, MovieConfig, MovieController, MovieError,
    PersistedMetadata, Point, Raster, SweepMode, Theme, colour_scheme_factory, evaluate,
    hsv_to_rgb, iteration_budget_for_scale, pixel_to_complex_coords, render_image,
    sequence_frames,
};

fn red_blue_black() -> Theme {
    Theme {
        primary: Colour::new(255, 0, 0),
        foreground: Colour::new(0, 0, 255),
        background: Colour::BLACK,
    }
}

#[derive(Default)]
struct RecordingSink {
    indices: Vec<u32>,
    finished: bool,
}

impl FrameSinkPort for RecordingSink {
    fn submit(&mut self, index: u32, _raster: &Raster) -> Result<(), FrameSinkError> {
        self.indices.push(index);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), FrameSinkError> {
        self.finished = true;
        Ok(())
    }
}

#[test]
fn two_by_two_theme_render_has_black_centre_pixel() {
    let size = ImageSize::new(2, 2).unwrap();
    let params = FractalParameters::new(1.0, -0.75, 0.0, 100).unwrap();
    let map = colour_scheme_factory(ColourSchemeKind::ThemeInterpolated, 100, red_blue_black());

    let centre = pixel_to_complex_coords(Point { x: 1, y: 1 }, size, &params).unwrap();
    assert_eq!((centre.real, centre.imag), (-0.75, 0.0));
    assert_eq!(evaluate(centre, 100), EscapeResult::BoundedForever);

    let raster = render_image(size, &params, &map, SweepMode::Sequential).unwrap();

    assert_eq!(raster.pixel(Point { x: 1, y: 1 }).unwrap(), Colour::BLACK);
}

#[test]
fn documented_constants_hold() {
    assert!(matches!(
        evaluate(mandel_explorer::Complex { real: 5.0, imag: 0.0 }, 100),
        EscapeResult::Escaped { steps: 1, .. }
    ));
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0).unwrap(), Colour::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0).unwrap(), Colour::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0).unwrap(), Colour::new(0, 0, 255));
    assert!(hsv_to_rgb(400.0, 1.0, 1.0).is_err());
    assert_eq!(iteration_budget_for_scale(1.0), 100);
    assert_eq!(iteration_budget_for_scale(0.01), 338);
}

#[test]
fn parallel_and_sequential_rasters_are_identical() {
    let size = ImageSize::new(160, 90).unwrap();
    let params = FractalParameters::with_policy_budget(0.0064, -1.2411, 0.0869).unwrap();
    let map = colour_scheme_factory(
        ColourSchemeKind::SmoothHsv,
        params.iteration_budget(),
        Theme::default(),
    );

    let sequential = render_image(size, &params, &map, SweepMode::Sequential).unwrap();
    let parallel = render_image(size, &params, &map, SweepMode::Parallel).unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn exported_view_resumes_as_movie_target() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("view.png");
    let target = FractalParameters::new(0.05, -0.7436, 0.1318, 100).unwrap();

    let exporter = ExportController::new(ImageFilePresenter::new(), JsonSidecarStore::new());
    exporter
        .export(&ExportRequest {
            size: ImageSize::new(32, 18).unwrap(),
            params: target,
            colour_scheme: ColourSchemeKind::SmoothHsv,
            theme: Theme::default(),
            mode: SweepMode::Parallel,
            output: image.clone(),
            author: Some("Ada".to_string()),
        })
        .unwrap();

    assert!(image.is_file());
    let sidecar: PersistedMetadata =
        serde_json::from_str(&fs::read_to_string(dir.path().join("view.json")).unwrap()).unwrap();
    assert_eq!(sidecar.scale, 0.05);
    assert_eq!(sidecar.author, "Ada");

    let config = MovieConfig {
        source: image,
        size: ImageSize::new(16, 9).unwrap(),
        fps: 4,
        length_minutes: 0.05,
        iteration_budget: 80,
        initial_scale: 1.0,
        colour_scheme: ColourSchemeKind::ThemeInterpolated,
        theme: Theme::default(),
        mode: SweepMode::Parallel,
    };
    let mut sink = RecordingSink::default();

    let frames = MovieController::new(JsonSidecarStore::new())
        .run(&config, &mut sink)
        .unwrap();

    assert_eq!(frames, 12);
    assert_eq!(sink.indices, (0..12).collect::<Vec<u32>>());
    assert!(sink.finished);
}

#[test]
fn movie_from_image_without_parameters_fails() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("plain.jpg");
    fs::write(&image, b"not really a jpeg").unwrap();

    let config = MovieConfig {
        source: image,
        size: ImageSize::new(16, 9).unwrap(),
        fps: 30,
        length_minutes: 0.333,
        iteration_budget: 300,
        initial_scale: 1.0,
        colour_scheme: ColourSchemeKind::SmoothHsv,
        theme: Theme::default(),
        mode: SweepMode::Parallel,
    };

    let result =
        MovieController::new(JsonSidecarStore::new()).run(&config, &mut RecordingSink::default());

    assert!(matches!(
        result,
        Err(MovieError::Metadata(MetadataError::MissingMetadata { .. }))
    ));
}

#[test]
fn zoom_sequence_closes_on_stored_scale() {
    let store = JsonSidecarStore::new();
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("deep.jpg");
    fs::write(&image, b"jpeg").unwrap();
    store
        .save(
            &image,
            &PersistedMetadata {
                author: String::new(),
                file_label: PathBuf::from("deep.jpg").display().to_string(),
                scale: 0.0064001136585278761,
                center_x: -1.2411110166880112,
                center_y: 0.0868955541831086,
            },
        )
        .unwrap();

    let seed = store.load(&image).unwrap().seed(300).unwrap();
    let plan = AnimationPlan::new(
        AnimationPlan::frame_count_for(0.333, 30),
        1.0,
        seed.scale(),
    )
    .unwrap();
    let last = sequence_frames(&plan, &seed).last().unwrap().unwrap();

    let reached = last.scale() * plan.per_frame_scale_factor();
    assert!(((reached - seed.scale()) / seed.scale()).abs() < 1e-9);
    assert_eq!(last.center_x(), seed.center_x());
    assert_eq!(last.iteration_budget(), 300);
}
