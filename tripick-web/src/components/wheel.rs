//! The roulette wheel face: SVG sectors from the core geometry, a
//! rotation transform for the animation, and the center start button.

use yew::prelude::*;

use tripick_core::WheelLayout;

const SLICE_COLORS: [&str; 2] = ["#fde047", "#f59e0b"];
const LABEL_MAX_CHARS: usize = 7;
const SPIN_TRANSITION: &str = "transition: transform 4s cubic-bezier(0.12,0.6,0.08,1)";

#[derive(Properties, Clone, PartialEq)]
pub struct WheelProps {
    pub items: Vec<String>,
    pub rotation_deg: f64,
    pub spinning: bool,
    pub on_spin: Callback<()>,
}

fn truncated(label: &str) -> String {
    let mut chars = label.chars();
    let short: String = chars.by_ref().take(LABEL_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{short}…")
    } else {
        short
    }
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let layout = WheelLayout::default();
    let size = layout.size;
    let n = props.items.len();

    let sectors = layout
        .slices(n)
        .into_iter()
        .zip(props.items.iter())
        .enumerate()
        .map(|(i, (slice, label))| {
            let fill = SLICE_COLORS[i % SLICE_COLORS.len()];
            let transform = format!(
                "rotate({}, {}, {})",
                slice.mid_deg, slice.label_x, slice.label_y
            );
            html! {
                <g key={i}>
                    <path d={slice.path.clone()} fill={fill} stroke="#fff" stroke-width="1" />
                    <text
                        x={slice.label_x.to_string()}
                        y={slice.label_y.to_string()}
                        text-anchor="middle"
                        dominant-baseline="middle"
                        font-size="12"
                        fill="#1f2937"
                        transform={transform}
                    >
                        { truncated(label) }
                    </text>
                </g>
            }
        })
        .collect::<Html>();

    let style = format!(
        "{SPIN_TRANSITION}; transform: rotate({}deg)",
        props.rotation_deg
    );
    let on_click = {
        let on_spin = props.on_spin.clone();
        Callback::from(move |_| on_spin.emit(()))
    };

    html! {
        <div class="wheel-wrap">
            <div class="wheel-pointer" aria-hidden="true" />
            <div class="wheel-face" {style}>
                <svg width={size.to_string()} height={size.to_string()}
                     viewBox={format!("0 0 {size} {size}")}>
                    { sectors }
                </svg>
                <button class="wheel-start" onclick={on_click} disabled={props.spinning}>
                    { "START" }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncated("서울특별시"), "서울특별시");
        assert_eq!(truncated("강원특별자치도"), "강원특별자치도");
        assert_eq!(truncated("강원특별자치도청사"), "강원특별자치도…");
    }
}
