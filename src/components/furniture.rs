use yew::prelude::*;

struct Piece {
    name: &'static str,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
    color: &'static str,
    /// Inner detail: (left, top, width, height, color) relative to the piece.
    parts: &'static [(u32, u32, u32, u32, &'static str)],
}

// Decorative only; the actor walks over all of it.
const PIECES: &[Piece] = &[
    Piece {
        name: "bed",
        left: 40,
        top: 40,
        width: 140,
        height: 220,
        color: "#6e4b3a",
        parts: &[(10, 10, 120, 40, "#f0f0f0"), (10, 56, 120, 154, "#8fa7c9")],
    },
    Piece {
        name: "desk",
        left: 560,
        top: 40,
        width: 200,
        height: 90,
        color: "#8b6b4a",
        parts: &[(70, 8, 60, 36, "#1f2328"), (10, 52, 180, 28, "#a6845f")],
    },
    Piece {
        name: "shower",
        left: 40,
        top: 420,
        width: 140,
        height: 140,
        color: "#9ec9d8",
        parts: &[(55, 8, 30, 12, "#c0c0c0"), (10, 28, 120, 104, "rgba(255,255,255,0.35)")],
    },
    Piece {
        name: "fridge",
        left: 660,
        top: 400,
        width: 100,
        height: 160,
        color: "#d9dde2",
        parts: &[(6, 6, 88, 148, "#eef1f4"), (80, 40, 6, 50, "#8c959f")],
    },
    Piece {
        name: "microwave",
        left: 540,
        top: 480,
        width: 100,
        height: 60,
        color: "#3d444d",
        parts: &[(8, 8, 62, 44, "#11151a")],
    },
];

#[function_component]
pub fn Furniture() -> Html {
    html! {
        <>
            { for PIECES.iter().map(|p| html! {
                <div
                    key={p.name}
                    title={p.name}
                    style={format!(
                        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; background:{}; border-radius:6px;",
                        p.left, p.top, p.width, p.height, p.color
                    )}
                >
                    { for p.parts.iter().map(|&(l, t, w, h, c)| html! {
                        <div style={format!(
                            "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; background:{}; border-radius:4px;",
                            l, t, w, h, c
                        )}></div>
                    }) }
                </div>
            }) }
        </>
    }
}
