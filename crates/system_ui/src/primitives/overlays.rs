use sheet_runtime::{
    reduce_sheet, run_sheet_effects, ClickTarget, PointerSource, PressOrigin, SheetAction,
    SheetConfig, SheetHeight, SheetState, UNMOUNT_DELAY_MS,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::TouchEvent;

use super::sheet_host::WebSheetHost;
use super::*;

/// Presses inside these elements operate the control instead of starting a drag.
const INTERACTIVE_SELECTOR: &str =
    "button, a[href], input, select, textarea, [data-ui-kind='button']";

fn press_origin(target: Option<web_sys::EventTarget>) -> PressOrigin {
    let on_control = target
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some();
    if on_control {
        PressOrigin::InteractiveControl
    } else {
        PressOrigin::Surface
    }
}

fn click_target(ev: &MouseEvent, backdrop: Option<HtmlElement<html::Div>>) -> ClickTarget {
    match (ev.target(), backdrop) {
        (Some(target), Some(backdrop))
            if JsValue::from(target.clone()) == JsValue::from((*backdrop).clone()) =>
        {
            ClickTarget::Backdrop
        }
        _ => ClickTarget::Descendant,
    }
}

/// Header content, `None` when the header is hidden. Tracks only the config so drag updates
/// never rebuild the header nodes a touch may have started on.
fn header_content(state: RwSignal<SheetState>) -> Memo<Option<Option<String>>> {
    create_memo(move |_| {
        state.with(|s| s.config.show_header.then(|| s.config.title.clone()))
    })
}

fn touch_client_y(ev: &TouchEvent) -> Option<f64> {
    ev.touches()
        .item(0)
        .map(|touch| f64::from(touch.client_y()))
}

fn panel_style(height: &SheetHeight, offset: f64, is_open: bool, dragging: bool) -> String {
    let transform = if is_open {
        format!("translateY({offset}px)")
    } else {
        "translateY(100%)".to_string()
    };
    let transition = if dragging {
        "none".to_string()
    } else {
        format!("transform {UNMOUNT_DELAY_MS}ms ease-out")
    };
    format!(
        "height:{};transform:{transform};transition:{transition};",
        height.css_value()
    )
}

#[component]
/// Draggable bottom sheet rendered into a body-level portal.
///
/// The owner controls visibility through `open` and receives close requests through
/// `on_close`; the sheet never closes itself. Closing keeps the sheet mounted for the exit
/// transition before it leaves the DOM. Touch drags work anywhere on the panel; mouse drags
/// start from the header, which requires `show_header`.
pub fn BottomSheet(
    /// Owner-controlled open flag.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked on backdrop click or a release past the dismissal threshold.
    on_close: Callback<()>,
    /// Panel height; intrinsic when absent.
    #[prop(optional, into)]
    height: SheetHeight,
    /// Close when the backdrop itself is clicked.
    #[prop(default = MaybeSignal::Static(true), into)]
    enable_backdrop_close: MaybeSignal<bool>,
    /// Render the header drag handle.
    #[prop(optional)]
    show_header: bool,
    /// Header title.
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Extra classes appended to the panel.
    #[prop(optional, into)]
    class_name: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = Signal::derive(move || SheetConfig {
        height: height.clone(),
        enable_backdrop_close: enable_backdrop_close.get(),
        show_header,
        title: title.get(),
        class_name: class_name.get(),
    });
    let state = create_rw_signal(SheetState::new(config.get_untracked()));
    let host = store_value(None::<WebSheetHost>);

    let dispatch = Callback::new(move |action: SheetAction| {
        let Some(mut sheet) = state.try_get_untracked() else {
            return;
        };
        let previous = sheet.clone();

        match reduce_sheet(&mut sheet, action) {
            Ok(effects) => {
                // Commit before running effects: a close request can re-enter through `open`.
                if sheet != previous {
                    state.set(sheet);
                }
                if let Some(host) = host.try_get_value().flatten() {
                    run_sheet_effects(&host, effects);
                }
            }
            Err(err) => logging::warn!("bottom sheet reducer error: {err}"),
        }
    });
    host.set_value(Some(WebSheetHost::new(dispatch, on_close)));

    create_effect(move |_| {
        dispatch.call(SheetAction::UpdateConfig {
            config: config.get(),
        });
    });
    create_effect(move |_| {
        dispatch.call(SheetAction::SetOpen { open: open.get() });
    });
    on_cleanup(move || dispatch.call(SheetAction::Detach));

    let mounted = create_memo(move |_| state.with(SheetState::is_mounted));
    let is_open = create_memo(move |_| state.with(SheetState::is_open));
    let dragging = create_memo(move |_| state.with(SheetState::is_dragging));
    let header = header_content(state);
    let backdrop_ref = create_node_ref::<html::Div>();

    let on_touch_start = move |ev: TouchEvent| {
        if let Some(y) = touch_client_y(&ev) {
            dispatch.call(SheetAction::BeginDrag {
                source: PointerSource::Touch,
                y,
                origin: press_origin(ev.target()),
            });
        }
    };
    let on_touch_move = move |ev: TouchEvent| {
        if let Some(y) = touch_client_y(&ev) {
            dispatch.call(SheetAction::MoveDrag { y });
        }
    };
    let on_touch_end = move |_: TouchEvent| dispatch.call(SheetAction::EndDrag);
    let on_header_mousedown = move |ev: MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let origin = press_origin(ev.target());
        if origin == PressOrigin::Surface {
            ev.prevent_default();
        }
        dispatch.call(SheetAction::BeginDrag {
            source: PointerSource::Mouse,
            y: f64::from(ev.client_y()),
            origin,
        });
    };
    let on_backdrop_click = move |ev: MouseEvent| {
        dispatch.call(SheetAction::BackdropClick {
            target: click_target(&ev, backdrop_ref.get_untracked()),
        });
    };

    move || {
        if !mounted.get() {
            return ().into_view();
        }
        let children = children.clone();

        view! {
            <Portal>
                <div
                    node_ref=backdrop_ref
                    class="ui-bottom-sheet-backdrop"
                    data-ui-primitive="true"
                    data-ui-kind="sheet-backdrop"
                    data-ui-open=move || bool_token(is_open.get())
                    on:click=on_backdrop_click
                >
                    <section
                        class=move || {
                            state.with(|s| {
                                merge_layout_class("ui-bottom-sheet", s.config.class_name.as_deref())
                            })
                        }
                        data-ui-primitive="true"
                        data-ui-kind="bottom-sheet"
                        data-ui-open=move || bool_token(is_open.get())
                        data-ui-dragging=move || bool_token(dragging.get())
                        style=move || {
                            state.with(|s| {
                                panel_style(&s.config.height, s.drag_offset(), s.is_open(), s.is_dragging())
                            })
                        }
                        on:touchstart=on_touch_start
                        on:touchmove=on_touch_move
                        on:touchend=on_touch_end
                        on:touchcancel=on_touch_end
                    >
                        {move || {
                            header
                                .get()
                                .map(|title| {
                                    view! {
                                        <header data-ui-slot="sheet-header" on:mousedown=on_header_mousedown>
                                            {title.map(|title| view! { <h2 data-ui-slot="sheet-title">{title}</h2> })}
                                        </header>
                                    }
                                })
                        }}
                        <div
                            data-ui-slot="sheet-body"
                            data-ui-has-header=move || bool_token(header.with(Option::is_some))
                        >
                            <div data-ui-slot="sheet-scroll">{children()}</div>
                        </div>
                    </section>
                </div>
            </Portal>
        }
        .into_view()
    }
}
