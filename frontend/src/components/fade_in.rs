use std::time::Duration;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::reveal::browser::{BrowserScheduler, BrowserViewport};
use crate::reveal::controller::{RevealController, RevealState};

/// Delay for the `index`-th item of a list that fades in one after another.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a region that fades and slides in the first time
/// at least a tenth of it scrolls into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let state = use_state_eq(|| RevealState::Hidden);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |delay_ms: &u32| {
                let controller = if state.is_revealed() {
                    None
                } else {
                    let label = format!("fade-in+{}ms", delay_ms);
                    let setter = state.setter();
                    let controller = RevealController::new(
                        label,
                        Duration::from_millis(u64::from(*delay_ms)),
                        BrowserViewport,
                        BrowserScheduler,
                        move || setter.set(RevealState::Revealed),
                    );
                    match node.cast::<Element>() {
                        Some(element) => controller.mount(&element),
                        None => warn!("fade-in region rendered without an element, leaving it hidden"),
                    }
                    Some(controller)
                };

                move || {
                    if let Some(controller) = controller {
                        controller.unmount();
                    }
                }
            },
            props.delay_ms,
        );
    }

    html! {
        <div ref={node} class={classes!(state.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_matches_section_layout() {
        let cards: Vec<u32> = (0..3).map(|i| stagger(200, 200, i)).collect();
        assert_eq!(cards, vec![200, 400, 600]);

        let faq: Vec<u32> = (0..5).map(|i| stagger(200, 100, i)).collect();
        assert_eq!(faq, vec![200, 300, 400, 500, 600]);
    }

    #[test]
    fn test_stagger_saturates() {
        assert_eq!(stagger(u32::MAX, 100, 3), u32::MAX);
        assert_eq!(stagger(0, u32::MAX, 2), u32::MAX);
    }
}
