use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cursor_trail::CursorTrail;
use crate::{config, scheduling, Route};

#[function_component(Booking)]
pub fn booking() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_calendly = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scheduling::open_popup(config::get_calendly_url());
    });

    html! {
        <div class="booking-page">
            <style>
                {r#"
                    .booking-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 80px 24px;
                        max-width: 760px;
                        margin: 0 auto;
                        text-align: center;
                        position: relative;
                        color: #fff;
                    }
                    .booking-back {
                        position: absolute;
                        top: 32px;
                        left: 32px;
                        color: #666;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .booking-back:hover { color: #fff; }
                    .booking-page h1 { font-size: 3rem; margin: 0 0 16px; }
                    .booking-tagline {
                        font-size: 1.4rem;
                        color: #F2C94C;
                        font-style: italic;
                        font-weight: 600;
                        margin-bottom: 48px;
                    }
                    .booking-pitch {
                        text-align: left;
                        max-width: 640px;
                        font-size: 1.15rem;
                        line-height: 1.7;
                        color: #D2D2D2;
                        display: flex;
                        flex-direction: column;
                        gap: 24px;
                    }
                    .booking-pitch .underlined {
                        text-decoration: underline;
                        text-decoration-color: rgba(242, 201, 76, 0.6);
                        text-underline-offset: 4px;
                    }
                    .booking-pitch .accent { color: #F2C94C; font-style: italic; }
                    .booking-pitch .strong { color: #fff; font-weight: 700; font-size: 1.4rem; }
                    .booking-cta {
                        margin-top: 48px;
                        background: #F2C94C;
                        color: #0E0E0E;
                        font-size: 1.25rem;
                        font-weight: 700;
                        padding: 24px 48px;
                        border: none;
                        border-radius: 4px;
                        cursor: pointer;
                        box-shadow: 0 0 20px rgba(242, 201, 76, 0.3);
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .booking-cta:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 0 30px rgba(242, 201, 76, 0.5);
                    }
                "#}
            </style>
            <CursorTrail />
            <Link<Route> to={Route::Home} classes="booking-back">
                {"← Back"}
            </Link<Route>>

            <h1>{"Let's do this…."}</h1>
            <p class="booking-tagline">{"but full transparency first"}</p>

            <div class="booking-pitch">
                <p>
                    {"We're "}
                    <span class="underlined">{"still building the product"}</span>
                    {". Which means this call is different."}
                </p>
                <p class="underlined">
                    {"I'll share the complete revenue system framework we're building: the exact structure for predictable SaaS growth."}
                </p>
                <p class="accent">{"You can take it and run with it yourself. For free."}</p>
                <p>
                    {"I'll help you figure out what's actually broken in your setup right now — your positioning, your outbound, your conversion, whatever the real bottleneck is."}
                </p>
                <p class="strong">{"You get a clear strategy session + the framework."}</p>
                <p class="underlined">{"Fair trade?"}</p>
            </div>

            <button class="booking-cta" onclick={open_calendly}>
                {"Schedule time with me"}
            </button>
        </div>
    }
}
