use dvg::pipeline::{ChartConfig, render, sample_records};
use dvg::render::bar::bar_layout;
use dvg::render::render_kind;
use dvg::scene::Primitive;
use dvg::style::DEFAULT_COLOR;
use dvg::svg::to_svg_string;
use dvg::{ChartKind, DataRecord, Dimensions, Margin};

/// `[x, y, width, height]` of every `<rect>` in document order.
fn svg_rects(svg: &str) -> Vec<[f64; 4]> {
    svg.split("<rect ")
        .skip(1)
        .map(|el| {
            let attr = |name: &str| -> f64 {
                let key = format!("{name}=\"");
                let start = el.find(&key).unwrap() + key.len();
                let end = start + el[start..].find('"').unwrap();
                el[start..end].parse().unwrap()
            };
            [attr("x"), attr("y"), attr("width"), attr("height")]
        })
        .collect()
}

fn config(kind: ChartKind) -> ChartConfig {
    ChartConfig {
        kind,
        ..ChartConfig::default()
    }
}

#[test]
fn every_kind_renders_the_sample() {
    for kind in ChartKind::ALL {
        let scene = render(&config(kind));
        assert!(!scene.is_empty(), "{kind} produced nothing");
        assert_eq!((scene.width, scene.height), (300.0, 300.0));
        let svg = to_svg_string(&scene).unwrap();
        assert!(svg.starts_with("<svg"), "{kind}");
        assert!(svg.trim_end().ends_with("</svg>"), "{kind}");
    }
}

#[test]
fn rendering_is_deterministic() {
    for kind in ChartKind::ALL {
        let cfg = config(kind);
        let a = render(&cfg);
        let b = render(&cfg);
        assert_eq!(a, b, "{kind}");
        assert_eq!(to_svg_string(&a).unwrap(), to_svg_string(&b).unwrap(), "{kind}");
    }
}

#[test]
fn every_kind_tolerates_empty_data() {
    let dims = Dimensions::default();
    for kind in ChartKind::ALL {
        let scene = render_kind(kind, &[], &dims, DEFAULT_COLOR);
        assert!(to_svg_string(&scene).is_ok(), "{kind}");
    }
}

#[test]
fn bar_chart_has_one_rect_per_record() {
    let scene = render(&config(ChartKind::Bar));
    assert_eq!(scene.rects().count(), sample_records().len());
    for rect in scene.rects() {
        if let Primitive::Rect { fill, .. } = rect {
            assert_eq!(fill.color, DEFAULT_COLOR);
        }
    }
}

#[test]
fn bars_below_baseline_are_dropped() {
    let recs = vec![DataRecord::new("up", 5.0), DataRecord::new("down", -5.0)];
    let scene = render_kind(ChartKind::Bar, &recs, &Dimensions::default(), DEFAULT_COLOR);
    assert_eq!(scene.rects().count(), 1);
}

#[test]
fn svg_rects_match_bar_geometry() {
    let recs = sample_records();
    let dims = Dimensions::default();
    let layout = bar_layout(&recs, &dims);
    let svg = to_svg_string(&render_kind(ChartKind::Bar, &recs, &dims, DEFAULT_COLOR)).unwrap();
    let rects = svg_rects(&svg);
    assert_eq!(rects.len(), layout.bars.len());
    for (rect, bar) in rects.iter().zip(&layout.bars) {
        assert!((rect[0] - (dims.margin.left + bar.x)).abs() < 1e-6);
        assert!((rect[1] - (dims.margin.top + bar.y)).abs() < 1e-6);
        assert!((rect[2] - bar.width).abs() < 1e-6);
        assert!((rect[3] - bar.height).abs() < 1e-6);
    }
}

#[test]
fn narrow_bands_keep_their_width_in_svg() {
    let recs: Vec<_> = (1..=300).map(|i| DataRecord::new(i.to_string(), i as f64)).collect();
    let dims = Dimensions::default();
    let bandwidth = bar_layout(&recs, &dims).band.bandwidth();
    assert!(bandwidth < 1.0);
    let svg = to_svg_string(&render_kind(ChartKind::Bar, &recs, &dims, DEFAULT_COLOR)).unwrap();
    let rects = svg_rects(&svg);
    assert_eq!(rects.len(), 300);
    for rect in rects {
        assert!((rect[2] - bandwidth).abs() < 1e-6);
    }
}

#[test]
fn margins_larger_than_canvas_degrade_without_panicking() {
    let dims = Dimensions::new(30.0, 30.0).with_margin(Margin::uniform(40.0));
    assert!(dims.inner_width() <= 0.0 && dims.inner_height() <= 0.0);
    for kind in ChartKind::ALL {
        let scene = render_kind(kind, &sample_records(), &dims, DEFAULT_COLOR);
        assert!(to_svg_string(&scene).is_ok(), "{kind}");
    }

    let layout = bar_layout(&sample_records(), &dims);
    assert!(layout.inner_width <= 0.0);
    assert!(layout.inner_height <= 0.0);
    assert_eq!(layout.bars.len(), 5);
    let scene = render_kind(ChartKind::Bar, &sample_records(), &dims, DEFAULT_COLOR);
    assert!(scene.is_empty());
}
