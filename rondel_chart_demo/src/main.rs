// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut chart demo for `rondel_chart`.
//!
//! Drives one chart through the full transition repertoire (grow-in, value
//! change, removal, re-add) and writes the captured frames to an HTML report.

mod html;
mod svg;

use kurbo::Size;
use peniko::color::palette::css;
use rondel_chart::{ChartStyle, CornerRadii, Easing, RingChart, RingItem, ring_point};

/// Seconds advanced between captured frames.
const FRAME_STEP: f64 = 0.3;

fn main() {
    let style = ChartStyle::default()
        .with_ring_width(42.0)
        .with_gap_degrees(4.0)
        .with_corners(CornerRadii::from_outer_inner(10.0, 6.0))
        .with_duration(0.9)
        .with_easing(Easing::EaseInOut);
    let mut chart = RingChart::new(style);

    let sections = vec![
        run_phase(
            &mut chart,
            "First item",
            "A single item draws as one full-circle stroke.",
            vec![
                RingItem::new(35.0, css::GOLDENROD)
                    .with_id("disk")
                    .with_label("disk"),
            ],
        ),
        run_phase(
            &mut chart,
            "Grow in",
            "Two new items grow in next to the steady first one.",
            vec![
                RingItem::new(35.0, css::GOLDENROD)
                    .with_id("disk")
                    .with_label("disk"),
                RingItem::new(45.0, css::TEAL)
                    .with_id("media")
                    .with_label("media"),
                RingItem::new(20.0, css::TOMATO)
                    .with_id("other")
                    .with_label("other"),
            ],
        ),
        run_phase(
            &mut chart,
            "Value change",
            "The media item glides from 45 to 80; its neighbors give way.",
            vec![
                RingItem::new(35.0, css::GOLDENROD)
                    .with_id("disk")
                    .with_label("disk"),
                RingItem::new(80.0, css::TEAL)
                    .with_id("media")
                    .with_label("media"),
                RingItem::new(20.0, css::TOMATO)
                    .with_id("other")
                    .with_label("other"),
            ],
        ),
        run_phase(
            &mut chart,
            "Removal",
            "The other item shrinks out while holding its position.",
            vec![
                RingItem::new(35.0, css::GOLDENROD)
                    .with_id("disk")
                    .with_label("disk"),
                RingItem::new(80.0, css::TEAL)
                    .with_id("media")
                    .with_label("media"),
            ],
        ),
        run_phase(
            &mut chart,
            "Re-add",
            "A cache item appears between the survivors.",
            vec![
                RingItem::new(35.0, css::GOLDENROD)
                    .with_id("disk")
                    .with_label("disk"),
                RingItem::new(25.0, css::MEDIUM_PURPLE)
                    .with_id("cache")
                    .with_label("cache"),
                RingItem::new(80.0, css::TEAL)
                    .with_id("media")
                    .with_label("media"),
            ],
        ),
    ];

    report_hit_tests(&chart);

    let report = html::render_report("rondel_chart demo", &sections);
    std::fs::write("rondel_chart_demo.html", report).expect("write rondel_chart_demo.html");
    println!("wrote rondel_chart_demo.html");
}

fn view() -> Size {
    Size::new(260.0, 260.0)
}

/// Submits a list and captures frames until the transitions settle.
fn run_phase(
    chart: &mut RingChart,
    title: &str,
    caption: &str,
    items: Vec<RingItem>,
) -> html::Section {
    chart.set_items(items);
    let mut frames = vec![svg::shapes_to_svg(&chart.shapes(view()), view())];
    while chart.advance(FRAME_STEP) {
        frames.push(svg::shapes_to_svg(&chart.shapes(view()), view()));
    }
    // The settled frame.
    frames.push(svg::shapes_to_svg(&chart.shapes(view()), view()));
    println!("{title}: captured {} frames", frames.len());
    html::Section {
        title: title.to_string(),
        caption: caption.to_string(),
        frames,
    }
}

/// Probes the settled chart along the ring and prints what each tap would hit.
fn report_hit_tests(chart: &RingChart) {
    let (center, mid_radius) = (
        kurbo::Point::new(view().width / 2.0, view().height / 2.0),
        view().width / 2.0 - chart.style().ring_width / 2.0,
    );
    for degrees in [30.0, 120.0, 210.0, 300.0] {
        let point = ring_point(center, mid_radius, degrees);
        match chart.hit_test(point, view()) {
            Some(hit) => println!("tap at {degrees:>5.1}° hits {} (#{})", hit.id, hit.index),
            None => println!("tap at {degrees:>5.1}° hits a gap"),
        }
    }
}
