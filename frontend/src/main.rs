use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod reveal {
    pub mod browser;
    pub mod controller;
    #[cfg(test)]
    pub mod fake;
}
mod components {
    pub mod dialog;
    pub mod fade_in;
}
mod pages {
    pub mod landing;
    pub mod legal;
}

use content::SiteContent;
use pages::{
    landing::Landing,
    legal::{PrivacyPage, TermsPage},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsPage /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPage /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

pub fn nav_classes(scroll_y: f64) -> Classes {
    classes!("top-nav", (scroll_y > config::NAV_SCROLL_THRESHOLD).then(|| "scrolled"))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };

    html! {
        <nav class={nav_classes(scroll_y)}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={content.brand.logo.clone()} alt={format!("{} Logo", content.brand_name())} />
                    <span class="nav-brand">
                        { &content.brand.name_lead }
                        <span class="nav-brand-accent">{ &content.brand.name_accent }</span>
                    </span>
                </Link<Route>>
                <a href={content.links.current_booking_url()} class="nav-book">
                    {"Book Session"}
                </a>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 1rem 0;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                }
                .nav-logo img {
                    width: 2.5rem;
                    height: 2.5rem;
                    object-fit: cover;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: transform 0.3s ease;
                }
                .nav-logo:hover img {
                    transform: rotate(6deg);
                }
                .nav-brand {
                    font-size: 1.5rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    color: #fff;
                }
                .nav-brand-accent {
                    background: linear-gradient(90deg, #fde047, #f59e0b);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-book {
                    background: linear-gradient(90deg, #facc15, #f59e0b);
                    color: #000;
                    font-size: 0.875rem;
                    font-weight: 700;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    box-shadow: 0 0 15px rgba(251, 191, 36, 0.4);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .nav-book:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 25px rgba(251, 191, 36, 0.6);
                }
                @media (max-width: 768px) {
                    .nav-book {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(Unavailable)]
fn unavailable() -> Html {
    html! {
        <div class="unavailable" style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #000; color: #a1a1aa;">
            <p>{"This page is temporarily unavailable. Please check back soon."}</p>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    use_title(config::DOCUMENT_TITLE.to_string());

    let content = use_memo(
        |_| match SiteContent::embedded() {
            Ok(content) => Some(Rc::new(content)),
            Err(e) => {
                error!("Failed to load site content: {}", e);
                None
            }
        },
        (),
    );

    match &*content {
        Some(content) => html! {
            <ContextProvider<Rc<SiteContent>> context={content.clone()}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<SiteContent>>>
        },
        None => html! { <Unavailable /> },
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_switches_strictly_above_threshold() {
        assert!(!nav_classes(0.0).contains("scrolled"));
        assert!(!nav_classes(50.0).contains("scrolled"));
        assert!(nav_classes(50.5).contains("scrolled"));
        assert!(nav_classes(900.0).contains("top-nav"));
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Terms.to_path(), "/terms");
        assert_eq!(Route::Privacy.to_path(), "/privacy");
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
    }
}
