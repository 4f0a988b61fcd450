use approx::assert_relative_eq;
use chrono::NaiveDate;
use timeline_rs::core::{DisasterCategory, EventDataset, EventRecord, Viewport};
use timeline_rs::render::NullRenderer;
use timeline_rs::{TimelineConfig, TimelineEngine};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn engine_for(records: Vec<EventRecord>) -> TimelineEngine<NullRenderer> {
    let dataset = EventDataset::build(records).expect("valid dataset");
    TimelineEngine::new(NullRenderer::default(), TimelineConfig::default(), dataset)
        .expect("engine init")
}

fn katrina_records() -> Vec<EventRecord> {
    vec![
        EventRecord::new(
            DisasterCategory::Flooding,
            50.0,
            date(2005, 8, 29),
            "Katrina",
        ),
        EventRecord::new(
            DisasterCategory::Flooding,
            10.0,
            date(2005, 3, 1),
            "Spring Flood",
        ),
    ]
}

#[test]
fn katrina_scenario_end_to_end() {
    let mut engine = engine_for(katrina_records());

    assert_eq!(engine.dataset().max_year(), 2005);
    assert_eq!(engine.dataset().max_magnitude_in(2005), Some(50.0));

    engine.render().expect("render");
    let frame = engine.last_frame().expect("frame").clone();
    assert_eq!(frame.arcs.len(), 2);
    assert_eq!(frame.annotations.len(), 1);
    assert_eq!(frame.annotations[0].text, "Katrina");

    // Selecting the category both records share keeps both visible.
    let selected = engine
        .toggle_category(DisasterCategory::Flooding)
        .expect("toggle");
    assert!(selected);
    assert_eq!(engine.last_frame().expect("frame").arcs.len(), 2);

    // Toggling again returns the filter to empty, which still shows all.
    let selected = engine
        .toggle_category(DisasterCategory::Flooding)
        .expect("toggle");
    assert!(!selected);
    assert!(engine.filter().is_empty());
    assert_eq!(engine.last_frame().expect("frame").arcs.len(), 2);
}

#[test]
fn filtered_out_maximum_promotes_no_substitute() {
    let mut engine = engine_for(vec![
        EventRecord::new(DisasterCategory::SevereStorm, 30.0, date(2010, 5, 2), "A"),
        EventRecord::new(
            DisasterCategory::TropicalCyclone,
            80.0,
            date(2010, 9, 13),
            "B",
        ),
    ]);

    engine
        .toggle_category(DisasterCategory::SevereStorm)
        .expect("toggle");

    let frame = engine.last_frame().expect("frame");
    assert_eq!(frame.arcs.len(), 1);
    assert_eq!(frame.arcs[0].category, DisasterCategory::SevereStorm);
    // The per-year maximum (80, record "B") is filtered out, so no label at all.
    assert!(frame.annotations.is_empty());
}

#[test]
fn ties_at_the_yearly_maximum_all_get_labeled() {
    let mut engine = engine_for(vec![
        EventRecord::new(DisasterCategory::Flooding, 25.0, date(2012, 4, 1), "First"),
        EventRecord::new(
            DisasterCategory::SevereStorm,
            25.0,
            date(2012, 10, 1),
            "Second",
        ),
    ]);

    engine.render().expect("render");
    let frame = engine.last_frame().expect("frame");
    assert_eq!(frame.annotations.len(), 2);
}

#[test]
fn per_year_extrema_are_stable_across_toggle_sequences() {
    let mut engine = engine_for(vec![
        EventRecord::new(
            DisasterCategory::Flooding,
            50.0,
            date(2005, 8, 29),
            "Katrina",
        ),
        EventRecord::new(DisasterCategory::SevereStorm, 30.0, date(2010, 5, 2), "A"),
        EventRecord::new(
            DisasterCategory::TropicalCyclone,
            80.0,
            date(2010, 9, 13),
            "B",
        ),
    ]);

    let before = engine.dataset().max_magnitude_by_year().clone();

    for category in DisasterCategory::ALL {
        engine.toggle_category(category).expect("toggle");
    }
    engine
        .toggle_category(DisasterCategory::Flooding)
        .expect("toggle");

    assert_eq!(engine.dataset().max_magnitude_by_year(), &before);
}

#[test]
fn axes_are_value_stable_across_filter_changes() {
    let mut engine = engine_for(katrina_records());

    engine.render().expect("render");
    let first = engine.last_frame().expect("frame").clone();

    engine
        .toggle_category(DisasterCategory::TropicalCyclone)
        .expect("toggle");
    let second = engine.last_frame().expect("frame");

    assert_eq!(first.month_ticks, second.month_ticks);
    assert_eq!(first.year_ticks, second.year_ticks);
    assert_eq!(first.grid_lines, second.grid_lines);
}

#[test]
fn horizontal_position_is_year_invariant_after_reanchoring() {
    let mut engine = engine_for(vec![
        EventRecord::new(
            DisasterCategory::Flooding,
            50.0,
            date(2005, 8, 29),
            "Katrina",
        ),
        EventRecord::new(
            DisasterCategory::TropicalCyclone,
            40.0,
            date(2010, 8, 29),
            "Same day, later year",
        ),
    ]);

    engine.render().expect("render");
    let frame = engine.last_frame().expect("frame");
    assert_eq!(frame.arcs.len(), 2);
    assert_relative_eq!(frame.arcs[0].apex_x, frame.arcs[1].apex_x);
    // Different years still land in different band rows.
    assert!(frame.arcs[0].apex_y != frame.arcs[1].apex_y);
}

#[test]
fn arc_apex_sits_offset_below_the_band_top() {
    let mut engine = engine_for(katrina_records());
    engine.render().expect("render");

    let config = *engine.config();
    let frame = engine.last_frame().expect("frame");
    // Single year, so every band position is the top row.
    for arc in &frame.arcs {
        assert_relative_eq!(
            arc.apex_y,
            config.margins.top + config.arc_apex_offset_px
        );
    }
    for annotation in &frame.annotations {
        assert_relative_eq!(
            annotation.y,
            config.margins.top + config.annotation_offset_px
        );
    }
}

#[test]
fn radii_stay_within_configured_bounds() {
    let mut engine = engine_for(katrina_records());
    engine.render().expect("render");

    let config = *engine.config();
    let frame = engine.last_frame().expect("frame");
    for arc in &frame.arcs {
        assert!(arc.radius >= config.radius_min_px);
        assert!(arc.radius <= config.radius_max_px);
    }
}

#[test]
fn legend_reflects_selection_state() {
    let mut engine = engine_for(vec![
        EventRecord::new(
            DisasterCategory::Flooding,
            50.0,
            date(2005, 8, 29),
            "Katrina",
        ),
        EventRecord::new(DisasterCategory::SevereStorm, 30.0, date(2010, 5, 2), "A"),
    ]);

    engine.render().expect("render");
    let frame = engine.last_frame().expect("frame");
    assert_eq!(frame.legend.len(), 2);
    assert!(frame.legend.iter().all(|entry| !entry.selected));

    engine
        .toggle_category(DisasterCategory::Flooding)
        .expect("toggle");
    let frame = engine.last_frame().expect("frame");

    let flooding = frame
        .legend
        .iter()
        .find(|entry| entry.category == DisasterCategory::Flooding)
        .expect("flooding legend entry");
    let severe = frame
        .legend
        .iter()
        .find(|entry| entry.category == DisasterCategory::SevereStorm)
        .expect("severe-storm legend entry");

    assert!(flooding.selected);
    assert!(!severe.selected);
    assert!(flooding.label_color != severe.label_color);
    assert_eq!(flooding.label, "Flooding");
    assert_eq!(severe.label, "Severe storms");
}

#[test]
fn ticks_and_legend_carry_configured_metrics() {
    let dataset = EventDataset::build(katrina_records()).expect("valid dataset");
    let mut config = TimelineConfig::default();
    config.axis_tick_size_px = 6.0;
    config.axis_tick_padding_px = 3.0;
    config.legend_font_size_px = 16.0;

    let mut engine =
        TimelineEngine::new(NullRenderer::default(), config, dataset).expect("engine init");
    engine.render().expect("render");

    let frame = engine.last_frame().expect("frame");
    for tick in frame.month_ticks.iter().chain(&frame.year_ticks) {
        assert_relative_eq!(tick.tick_size_px, 6.0);
        assert_relative_eq!(tick.label_padding_px, 3.0);
    }
    for entry in &frame.legend {
        assert_relative_eq!(entry.font_size_px, 16.0);
    }
}

#[test]
fn legend_membership_comes_from_the_data_not_the_enum() {
    let mut engine = engine_for(katrina_records());
    engine.render().expect("render");

    // Only one category occurs in the data, so only one legend row renders.
    let frame = engine.last_frame().expect("frame");
    assert_eq!(frame.legend.len(), 1);
    assert_eq!(engine.legend_categories().len(), 1);
}

#[test]
fn tooltip_hits_the_topmost_arc() {
    let mut engine = engine_for(vec![
        EventRecord::new(DisasterCategory::Flooding, 50.0, date(2005, 6, 15), "Big"),
        EventRecord::new(
            DisasterCategory::SevereStorm,
            12.0,
            date(2005, 6, 15),
            "Small",
        ),
    ]);

    assert!(engine.tooltip_at(0.0, 0.0).is_none());

    engine.render().expect("render");
    let frame = engine.last_frame().expect("frame").clone();
    let small = frame.arcs[1];

    // Just above the shared apex, inside the smaller (later-drawn) disc.
    let tooltip = engine
        .tooltip_at(small.apex_x, small.apex_y - 1.0)
        .expect("tooltip hit");
    assert_eq!(tooltip.name, "Small");
    assert_relative_eq!(tooltip.magnitude, 12.0);

    // Below the apex is outside every half-disc.
    assert!(engine.tooltip_at(small.apex_x, small.apex_y + 5.0).is_none());
}

#[test]
fn engine_rejects_invalid_config() {
    let dataset = EventDataset::build(katrina_records()).expect("valid dataset");
    let config = TimelineConfig::new(Viewport::new(40, 900));

    let result = TimelineEngine::new(NullRenderer::default(), config, dataset);
    assert!(result.is_err());
}

#[test]
fn renderer_observes_every_pass() {
    let mut engine = engine_for(katrina_records());
    engine.render().expect("render");
    engine
        .toggle_category(DisasterCategory::Flooding)
        .expect("toggle");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_arc_count, 2);
    assert_eq!(renderer.last_annotation_count, 1);
    assert_eq!(renderer.last_legend_count, 1);
}
