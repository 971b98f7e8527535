use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

/// Dot-and-ring cursor effect: the dot snaps to the pointer, the ring eases
/// toward it on an animation-frame loop and grows over interactive elements.
/// Pure decoration; only active on devices with a fine pointer.
#[function_component(CursorTrail)]
pub fn cursor_trail() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let fine_pointer = window
                    .match_media("(pointer: fine)")
                    .ok()
                    .flatten()
                    .map(|m| m.matches())
                    .unwrap_or(false);

                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());

                if fine_pointer {
                    if let (Some(dot), Some(ring)) =
                        (dot_ref.cast::<HtmlElement>(), ring_ref.cast::<HtmlElement>())
                    {
                        // Shared between the listeners and the animation loop
                        let mouse = Rc::new(Cell::new((0.0f64, 0.0f64)));
                        let hovering = Rc::new(Cell::new(false));

                        // Inner dot follows the pointer immediately; both
                        // layers stay hidden until the first move so nothing
                        // sits at (0, 0) on load.
                        let mousemove = {
                            let mouse = mouse.clone();
                            let dot = dot.clone();
                            let ring = ring.clone();
                            Closure::wrap(Box::new(move |e: MouseEvent| {
                                let x = e.client_x() as f64;
                                let y = e.client_y() as f64;
                                mouse.set((x, y));
                                let _ = dot.style().set_property(
                                    "transform",
                                    &format!("translate3d({}px, {}px, 0)", x, y),
                                );
                                let _ = dot.style().set_property("opacity", "1");
                                let _ = ring.style().set_property("opacity", "1");
                            }) as Box<dyn FnMut(MouseEvent)>)
                        };
                        window
                            .add_event_listener_with_callback(
                                "mousemove",
                                mousemove.as_ref().unchecked_ref(),
                            )
                            .unwrap();

                        let mouseover = {
                            let hovering = hovering.clone();
                            Closure::wrap(Box::new(move |e: MouseEvent| {
                                let clickable = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<Element>().ok())
                                    .map(|el| {
                                        matches!(
                                            el.tag_name().as_str(),
                                            "BUTTON" | "A" | "INPUT" | "TEXTAREA"
                                        ) || el.closest("button").ok().flatten().is_some()
                                            || el.closest("a").ok().flatten().is_some()
                                    })
                                    .unwrap_or(false);
                                hovering.set(clickable);
                            }) as Box<dyn FnMut(MouseEvent)>)
                        };
                        window
                            .add_event_listener_with_callback(
                                "mouseover",
                                mouseover.as_ref().unchecked_ref(),
                            )
                            .unwrap();

                        // Ring eases toward the pointer, rescheduling itself
                        // every frame
                        let raf_id = Rc::new(Cell::new(0));
                        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                            Rc::new(RefCell::new(None));
                        let g = f.clone();
                        *g.borrow_mut() = Some(Closure::wrap(Box::new({
                            let f = f.clone();
                            let mouse = mouse.clone();
                            let hovering = hovering.clone();
                            let ring = ring.clone();
                            let raf_id = raf_id.clone();
                            let mut ring_pos = (0.0f64, 0.0f64);
                            move || {
                                let (mx, my) = mouse.get();
                                ring_pos.0 += (mx - ring_pos.0) * 0.15;
                                ring_pos.1 += (my - ring_pos.1) * 0.15;
                                let scale = if hovering.get() { 2.5 } else { 1.0 };
                                let style = ring.style();
                                let _ = style.set_property(
                                    "transform",
                                    &format!(
                                        "translate3d({:.2}px, {:.2}px, 0) scale({})",
                                        ring_pos.0, ring_pos.1, scale
                                    ),
                                );
                                if hovering.get() {
                                    let _ = style
                                        .set_property("background-color", "rgba(242, 201, 76, 0.1)");
                                    let _ = style
                                        .set_property("border-color", "rgba(242, 201, 76, 0.5)");
                                } else {
                                    let _ = style.set_property("background-color", "transparent");
                                    let _ = style.set_property("border-color", "#F2C94C");
                                }
                                raf_id.set(request_animation_frame(
                                    f.borrow().as_ref().unwrap(),
                                ));
                            }
                        })
                            as Box<dyn FnMut()>));
                        raf_id.set(request_animation_frame(g.borrow().as_ref().unwrap()));

                        let window = window.clone();
                        cleanup = Box::new(move || {
                            window
                                .remove_event_listener_with_callback(
                                    "mousemove",
                                    mousemove.as_ref().unchecked_ref(),
                                )
                                .unwrap();
                            window
                                .remove_event_listener_with_callback(
                                    "mouseover",
                                    mouseover.as_ref().unchecked_ref(),
                                )
                                .unwrap();
                            let _ = window.cancel_animation_frame(raf_id.get());
                            drop(g);
                        });
                    }
                }

                move || cleanup()
            },
            (),
        );
    }

    html! {
        <>
            <div
                ref={dot_ref}
                style="position: fixed; top: -4px; left: -4px; width: 8px; height: 8px; \
                       background: #F2C94C; border-radius: 50%; pointer-events: none; \
                       z-index: 100; opacity: 0; will-change: transform;"
            />
            <div
                ref={ring_ref}
                style="position: fixed; top: -20px; left: -20px; width: 40px; height: 40px; \
                       border: 1px solid #F2C94C; border-radius: 50%; pointer-events: none; \
                       z-index: 100; opacity: 0; will-change: transform; \
                       transition: background-color 0.2s, border-color 0.2s;"
            />
        </>
    }
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> i32 {
    web_sys::window()
        .unwrap()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK")
}
