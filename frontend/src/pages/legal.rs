use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Privacy, SiteContent, Terms};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct TermsBodyProps {
    pub terms: Terms,
}

#[function_component(TermsBody)]
pub fn terms_body(props: &TermsBodyProps) -> Html {
    html! {
        <>
            <p>{ &props.terms.intro }</p>
            <ol>
                { for props.terms.clauses.iter().map(|clause| html! { <li>{ clause }</li> }) }
            </ol>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrivacyBodyProps {
    pub privacy: Privacy,
    pub email: AttrValue,
}

#[function_component(PrivacyBody)]
pub fn privacy_body(props: &PrivacyBodyProps) -> Html {
    html! {
        <>
            { for props.privacy.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
            <p>
                { &props.privacy.contact_lead }{" "}
                <span class="contact-email">{ props.email.clone() }</span>
                {"."}
            </p>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{ props.title.clone() }</h1>
                <section>
                    { for props.children.iter() }
                </section>
                <Link<Route> to={Route::Home} classes="legal-back">
                    {"← Back to home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #000;
                    padding: 8rem 2rem 4rem;
                    color: #d4d4d8;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .legal-content > div {
                    background: #18181b;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    box-shadow: 0 0 50px rgba(234, 179, 8, 0.15);
                }

                .legal-content h1 {
                    font-size: 2rem;
                    color: #fff;
                    margin-bottom: 2rem;
                }

                .legal-content section {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    font-weight: 300;
                }

                .legal-content li, .legal-content p {
                    margin-bottom: 1rem;
                }

                .legal-content .contact-email {
                    color: #facc15;
                    font-weight: 700;
                }

                .legal-back {
                    display: inline-block;
                    margin-top: 2rem;
                    color: #facc15;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let terms = content.legal.terms.clone();

    html! {
        <LegalPage title={terms.title.clone()}>
            <TermsBody {terms} />
        </LegalPage>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let privacy = content.legal.privacy.clone();

    html! {
        <LegalPage title={privacy.title.clone()}>
            <PrivacyBody email={content.links.email.clone()} {privacy} />
        </LegalPage>
    }
}
