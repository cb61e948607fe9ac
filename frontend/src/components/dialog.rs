use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn is_open(self) -> bool {
        self == DialogState::Open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    Open,
    Close,
}

impl Reducible for DialogState {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            DialogAction::Open => DialogState::Open,
            DialogAction::Close => DialogState::Closed,
        };
        // Unchanged state hands back the same Rc.
        if *self == next {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Open/close state for one dialog, owned by whichever component calls the hook.
#[derive(Clone)]
pub struct DialogHandle {
    name: &'static str,
    state: UseReducerHandle<DialogState>,
}

impl DialogHandle {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn on_open(&self) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("opening {} dialog", handle.name);
            handle.state.dispatch(DialogAction::Open);
        })
    }

    pub fn on_close(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |_| {
            debug!("closing {} dialog", handle.name);
            handle.state.dispatch(DialogAction::Close);
        })
    }
}

#[hook]
pub fn use_dialog(name: &'static str) -> DialogHandle {
    let state = use_reducer_eq(DialogState::default);
    DialogHandle { name, state }
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    {
        // Registered once per dialog; closing an already closed dialog is a no-op.
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    window
                        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                        .ok()
                        .map(|_| (window, keydown))
                });

                move || {
                    if let Some((window, keydown)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    // Clicks inside the panel must not reach the backdrop.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-root" role="dialog" aria-modal="true">
            <div class="dialog-backdrop" onclick={close.clone()}></div>
            <div class="dialog-panel" onclick={swallow}>
                <div class="dialog-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="dialog-dismiss" aria-label="Close" onclick={close.clone()}>
                        {"✕"}
                    </button>
                </div>
                <div class="dialog-body">
                    { for props.children.iter() }
                </div>
                <div class="dialog-footer">
                    <button class="dialog-close" onclick={close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: DialogState, actions: &[DialogAction]) -> Rc<DialogState> {
        actions
            .iter()
            .fold(Rc::new(state), |state, action| state.reduce(*action))
    }

    #[test]
    fn test_dialog_starts_closed() {
        assert_eq!(DialogState::default(), DialogState::Closed);
        assert!(!DialogState::default().is_open());
    }

    #[test]
    fn test_open_and_close_transition() {
        assert_eq!(*apply(DialogState::Closed, &[DialogAction::Open]), DialogState::Open);
        assert_eq!(*apply(DialogState::Open, &[DialogAction::Close]), DialogState::Closed);
        assert_eq!(
            *apply(DialogState::Closed, &[DialogAction::Open, DialogAction::Close]),
            DialogState::Closed
        );
    }

    #[test]
    fn test_open_is_idempotent() {
        let open = apply(DialogState::Closed, &[DialogAction::Open]);
        let again = open.clone().reduce(DialogAction::Open);
        assert_eq!(*again, DialogState::Open);
        assert!(Rc::ptr_eq(&open, &again));
    }

    #[test]
    fn test_close_is_idempotent() {
        let closed = apply(DialogState::Open, &[DialogAction::Close]);
        let again = closed.clone().reduce(DialogAction::Close);
        assert_eq!(*again, DialogState::Closed);
        assert!(Rc::ptr_eq(&closed, &again));

        let never_opened = Rc::new(DialogState::Closed);
        assert!(Rc::ptr_eq(&never_opened, &never_opened.clone().reduce(DialogAction::Close)));
    }

    #[test]
    fn test_terms_then_backdrop_leaves_privacy_closed() {
        let privacy = Rc::new(DialogState::default());

        let terms = Rc::new(DialogState::default()).reduce(DialogAction::Open);
        assert!(terms.is_open());
        assert!(!privacy.is_open());

        // Backdrop, header and footer buttons all dispatch Close.
        let terms = terms.reduce(DialogAction::Close);
        assert!(!terms.is_open());
        assert!(!privacy.is_open());
    }
}
