//! SVG rendering of the chart descriptions built by `dashboard::charts`.

use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::charts::{BarChartSpec, DonutChartSpec, Orientation};
use crate::dashboard::geometry::{self, Donut, Frame};
use crate::t;

const WIDTH: f64 = 640.0;
const ROW_HEIGHT: f64 = 34.0;
const LABEL_CHARS: usize = 26;
const TICK_STEPS: usize = 5;

#[component]
pub fn BarChartView(spec: BarChartSpec) -> Element {
    rsx! {
        figure { class: "chart", id: "{spec.id}",
            figcaption { class: "chart__title", "{spec.title}" }
            if spec.bars.is_empty() {
                p { class: "chart__placeholder", {t!("chart-empty")} }
            } else {
                {match spec.orientation {
                    Orientation::Horizontal => render_horizontal(&spec),
                    Orientation::Vertical => render_vertical(&spec),
                }}
            }
        }
    }
}

fn render_horizontal(spec: &BarChartSpec) -> Element {
    let frame = Frame {
        width: WIDTH,
        height: 60.0 + ROW_HEIGHT * spec.bars.len() as f64,
        left: 200.0,
        right: 56.0,
        top: 8.0,
        bottom: 52.0,
    };
    let values: Vec<f64> = spec.bars.iter().map(|b| b.value).collect();
    let axis_max = geometry::nice_ceiling(values.iter().copied().fold(0.0, f64::max));
    let rects = geometry::bar_layout(&values, axis_max, Orientation::Horizontal, &frame);
    let ticks = geometry::value_ticks(axis_max, frame.plot_width(), TICK_STEPS);
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let axis_y = frame.origin_y();
    let label_x = frame.left - 8.0;
    let title_x = frame.left + frame.plot_width() / 2.0;
    let title_y = frame.height - 12.0;
    let category_title_y = frame.top + frame.plot_height() / 2.0;

    rsx! {
        svg { class: "chart__canvas", view_box: "{view_box}", role: "img",
            for tick in ticks {
                line {
                    class: "chart__grid",
                    x1: "{frame.left + tick.offset}", y1: "{frame.top}",
                    x2: "{frame.left + tick.offset}", y2: "{axis_y}",
                }
                text {
                    class: "chart__tick",
                    x: "{frame.left + tick.offset}", y: "{axis_y + 16.0}",
                    text_anchor: "middle",
                    "{format_tick(tick.value)}"
                }
            }
            for (bar, rect) in spec.bars.iter().zip(rects) {
                g { class: "chart__bar-group",
                    rect {
                        class: "chart__bar",
                        x: "{rect.x}", y: "{rect.y}",
                        width: "{rect.width}", height: "{rect.height}",
                        title { "{hover_text(&bar.label, bar.value, spec.decimals)}" }
                    }
                    text {
                        class: "chart__category",
                        x: "{label_x}", y: "{rect.y + rect.height / 2.0}",
                        text_anchor: "end", dominant_baseline: "middle",
                        "{truncate_label(&bar.label, LABEL_CHARS)}"
                    }
                    text {
                        class: "chart__value",
                        x: "{rect.x + rect.width + 6.0}", y: "{rect.y + rect.height / 2.0}",
                        dominant_baseline: "middle",
                        "{format::format_millions(bar.value, spec.decimals)}"
                    }
                }
            }
            text { class: "chart__axis-title", x: "{title_x}", y: "{title_y}", text_anchor: "middle",
                "{spec.value_label}"
            }
            text {
                class: "chart__axis-title",
                x: "12", y: "{category_title_y}",
                text_anchor: "middle",
                transform: "rotate(-90 12 {category_title_y})",
                "{spec.category_label}"
            }
        }
    }
}

fn render_vertical(spec: &BarChartSpec) -> Element {
    let frame = Frame {
        width: WIDTH,
        height: 380.0,
        left: 64.0,
        right: 16.0,
        top: 20.0,
        bottom: 96.0,
    };
    let values: Vec<f64> = spec.bars.iter().map(|b| b.value).collect();
    let axis_max = geometry::nice_ceiling(values.iter().copied().fold(0.0, f64::max));
    let rects = geometry::bar_layout(&values, axis_max, Orientation::Vertical, &frame);
    let ticks = geometry::value_ticks(axis_max, frame.plot_height(), TICK_STEPS);
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let axis_y = frame.origin_y();
    let right_edge = frame.width - frame.right;
    let value_title_y = frame.top + frame.plot_height() / 2.0;
    let category_title_x = frame.left + frame.plot_width() / 2.0;
    let category_title_y = frame.height - 8.0;

    rsx! {
        svg { class: "chart__canvas", view_box: "{view_box}", role: "img",
            for tick in ticks {
                line {
                    class: "chart__grid",
                    x1: "{frame.left}", y1: "{axis_y - tick.offset}",
                    x2: "{right_edge}", y2: "{axis_y - tick.offset}",
                }
                text {
                    class: "chart__tick",
                    x: "{frame.left - 6.0}", y: "{axis_y - tick.offset}",
                    text_anchor: "end", dominant_baseline: "middle",
                    "{format_tick(tick.value)}"
                }
            }
            for (bar, rect) in spec.bars.iter().zip(rects) {
                g { class: "chart__bar-group",
                    rect {
                        class: "chart__bar",
                        x: "{rect.x}", y: "{rect.y}",
                        width: "{rect.width}", height: "{rect.height}",
                        title { "{hover_text(&bar.label, bar.value, spec.decimals)}" }
                    }
                    text {
                        class: "chart__category",
                        x: "{rect.x + rect.width / 2.0}", y: "{axis_y + 14.0}",
                        text_anchor: "end",
                        transform: "rotate(-45 {rect.x + rect.width / 2.0} {axis_y + 14.0})",
                        "{truncate_label(&bar.label, 12)}"
                    }
                }
            }
            text {
                class: "chart__axis-title",
                x: "14", y: "{value_title_y}",
                text_anchor: "middle",
                transform: "rotate(-90 14 {value_title_y})",
                "{spec.value_label}"
            }
            text { class: "chart__axis-title", x: "{category_title_x}", y: "{category_title_y}", text_anchor: "middle",
                "{spec.category_label}"
            }
        }
    }
}

#[component]
pub fn DonutChartView(spec: DonutChartSpec) -> Element {
    let donut = Donut {
        cx: 220.0,
        cy: 190.0,
        radius: 140.0,
        hole: spec.hole,
    };
    let values: Vec<f64> = spec.slices.iter().map(|s| s.value).collect();
    let pulls: Vec<f64> = spec.slices.iter().map(|s| s.pull).collect();
    let paths = geometry::donut_slices(&values, &pulls, &donut);

    rsx! {
        figure { class: "chart chart--donut", id: "{spec.id}",
            figcaption { class: "chart__title chart__title--centered", "{spec.title}" }
            if paths.is_empty() {
                p { class: "chart__placeholder", {t!("chart-empty")} }
            } else {
                svg { class: "chart__canvas", view_box: "0 0 {WIDTH} 380", role: "img",
                    for (slice, path) in spec.slices.iter().zip(paths.iter()) {
                        g { class: "chart__slice-group",
                            path {
                                class: "chart__slice chart__slice--{slice.region.slug()}",
                                d: "{path.d}",
                                title { "{hover_text(&slice.label, slice.value, spec.decimals)}" }
                            }
                            if path.fraction > 0.0 {
                                text {
                                    class: "chart__slice-label",
                                    x: "{path.label_x}", y: "{path.label_y - 7.0}",
                                    text_anchor: "middle",
                                    "{slice.label}"
                                }
                                text {
                                    class: "chart__slice-percent",
                                    x: "{path.label_x}", y: "{path.label_y + 9.0}",
                                    text_anchor: "middle",
                                    "{format::format_percent(path.fraction)}"
                                }
                            }
                        }
                    }
                    g { class: "chart__legend",
                        text { class: "chart__legend-title", x: "440", y: "120", "{spec.legend_title}" }
                        for (i, slice) in spec.slices.iter().enumerate() {
                            rect {
                                class: "chart__legend-swatch chart__slice--{slice.region.slug()}",
                                x: "440", y: "{136.0 + i as f64 * 26.0}",
                                width: "14", height: "14", rx: "3",
                            }
                            text {
                                class: "chart__legend-label",
                                x: "462", y: "{148.0 + i as f64 * 26.0}",
                                "{slice.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn hover_text(label: &str, value: f64, decimals: u32) -> String {
    format!("{label}: {}", format::format_millions(value, decimals))
}

/// Cut long category names to `max_chars`, ending with an ellipsis.
pub(crate) fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(truncate_label("Wii Sports", 26), "Wii Sports");
    }

    #[test]
    fn long_labels_end_with_ellipsis() {
        let label = truncate_label("The Legend of Zelda: Ocarina of Time", 12);
        assert_eq!(label, "The Legend…");
        assert_eq!(label.chars().count(), 11);
    }

    #[test]
    fn hover_text_follows_configured_decimals() {
        assert_eq!(hover_text("GTA V (PS3)", 21.4, 2), "GTA V (PS3): 21.40");
        assert_eq!(hover_text("Japan", 3.0, 0), "Japan: 3");
        assert_eq!(hover_text("Japan", 3.0, 3), "Japan: 3.000");
    }

    #[test]
    fn whole_ticks_drop_decimals() {
        assert_eq!(format_tick(25.0), "25");
        assert_eq!(format_tick(0.25), "0.25");
    }
}
