use std::rc::Rc;

use yew::prelude::*;

use crate::components::dialog::{use_dialog, Dialog};
use crate::components::fade_in::{stagger, FadeIn};
use crate::config;
use crate::content::{copyright_line, current_year, SiteContent};
use crate::pages::legal::{PrivacyBody, TermsBody};

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let hero = &props.content.hero;
    let booking = props.content.links.current_booking_url();

    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <FadeIn>
                        <div class="hero-badge">
                            <span class="pulse-dot"></span>
                            { &hero.badge }
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <h1>
                            { &hero.headline_lead }<br />
                            <span class="gold-text">{ &hero.headline_accent }</span><br />
                            { &hero.headline_tail }
                        </h1>
                    </FadeIn>
                    <FadeIn delay_ms={400}>
                        <h2 class="hero-subheadline">
                            { &hero.subheadline_lead }{" "}
                            <span class="advisor">{ &hero.advisor }</span>
                            { &hero.subheadline_tail }
                        </h2>
                    </FadeIn>
                    <FadeIn delay_ms={600}>
                        <p class="hero-intro">{ &hero.intro }</p>
                    </FadeIn>
                    <FadeIn delay_ms={800}>
                        <a href={booking} class="cta-button hero-cta">
                            { &hero.cta }
                            <span class="chevron">{"›"}</span>
                        </a>
                    </FadeIn>
                    <FadeIn delay_ms={1000}>
                        <div class="hero-stats">
                            { for hero.stats.iter().map(|stat| html! {
                                <div class="stat">
                                    <div class="stat-value">{ &stat.value }</div>
                                    <div class="stat-label">{ &stat.label }</div>
                                </div>
                            }) }
                        </div>
                    </FadeIn>
                </div>
                <FadeIn delay_ms={1200}>
                    <div class="hero-video">
                        <video autoplay={true} muted={true} loop={true} playsinline={true} controls={true}>
                            <source src={hero.video.clone()} type="video/mp4" />
                            {"Your browser does not support the video tag."}
                        </video>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(Pillars)]
fn pillars(props: &SectionProps) -> Html {
    let pillars = &props.content.pillars;

    html! {
        <section class="pillars">
            <FadeIn>
                <h2 class="section-title">
                    { &pillars.title_lead }{" "}
                    <span class="gold-text">{ &pillars.title_accent }</span>
                </h2>
            </FadeIn>
            <div class="card-grid three">
                { for pillars.items.iter().enumerate().map(|(i, pillar)| html! {
                    <FadeIn delay_ms={stagger(200, 200, i)}>
                        <div class="pillar-card">
                            <div class="pillar-letter">{ &pillar.letter }</div>
                            <h3>{ &pillar.title }</h3>
                            <p>{ &pillar.desc }</p>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(Breakdown)]
fn breakdown(props: &SectionProps) -> Html {
    let schedule = &props.content.schedule;

    html! {
        <section class="breakdown">
            <FadeIn>
                <div class="section-heading">
                    <h2 class="section-title">{ &schedule.title }</h2>
                    <p>{ &schedule.subtitle }</p>
                </div>
            </FadeIn>
            <div class="breakdown-list">
                { for schedule.blocks.iter().enumerate().map(|(i, block)| html! {
                    <FadeIn delay_ms={stagger(200, 200, i)}>
                        <div class="breakdown-block">
                            <div class="breakdown-when">
                                <span class="time-chip">{ &block.time }</span>
                                <h3>{ &block.title }</h3>
                            </div>
                            <ul class="check-list">
                                { for block.items.iter().map(|item| html! {
                                    <li><span class="check">{"✓"}</span>{ item }</li>
                                }) }
                            </ul>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(Deliverables)]
fn deliverables(props: &SectionProps) -> Html {
    let deliverables = &props.content.deliverables;

    html! {
        <section class="deliverables">
            <FadeIn>
                <h2 class="section-title">{ &deliverables.title }</h2>
            </FadeIn>
            <div class="card-grid two">
                { for deliverables.items.iter().enumerate().map(|(i, item)| html! {
                    <FadeIn delay_ms={stagger(200, 100, i)}>
                        <div class="deliverable-card">
                            <h3>{ &item.title }</h3>
                            <p>{ &item.desc }</p>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(About)]
fn about(props: &SectionProps) -> Html {
    let about = &props.content.about;

    html! {
        <section class="about">
            <FadeIn>
                <h2 class="section-title">{ &about.title }</h2>
            </FadeIn>
            <div class="about-grid">
                <FadeIn delay_ms={200}>
                    <div class="about-photo">
                        <img src={about.photo.clone()} alt={about.photo_alt.clone()} loading="lazy" />
                    </div>
                </FadeIn>
                <FadeIn delay_ms={400}>
                    <div class="about-bio">
                        <h3>{ &about.greeting }{" "}<span class="gold-text">{ &about.name }</span></h3>
                        { for about.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
                        <div class="credentials">
                            { for about.credentials.iter().map(|c| html! {
                                <div class="credential"><span class="check">{"✓"}</span>{ c }</div>
                            }) }
                        </div>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials(props: &SectionProps) -> Html {
    let testimonials = &props.content.testimonials;

    html! {
        <section class="testimonials">
            <FadeIn>
                <div class="section-heading">
                    <h2 class="section-title">{ &testimonials.title }</h2>
                    <p>{ &testimonials.subtitle }</p>
                </div>
            </FadeIn>
            <div class="card-grid three">
                { for testimonials.items.iter().enumerate().map(|(i, t)| html! {
                    <FadeIn delay_ms={stagger(200, 200, i)}>
                        <div class="testimonial-card">
                            <div class="stars">{"★★★★★"}</div>
                            <p class="quote">{ format!("\"{}\"", t.text) }</p>
                            <div class="client">
                                <div class="client-name">{ &t.name }</div>
                                <div class="client-role">{"Client"}</div>
                            </div>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(FaqList)]
fn faq_list(props: &SectionProps) -> Html {
    let faq = &props.content.faq;

    html! {
        <section class="faq">
            <FadeIn>
                <h2 class="section-title">{ &faq.title }</h2>
            </FadeIn>
            <div class="faq-list">
                { for faq.items.iter().enumerate().map(|(i, entry)| html! {
                    <FadeIn delay_ms={stagger(200, 100, i)}>
                        <div class="faq-entry">
                            <h3><span class="gold-text">{"Q."}</span>{" "}{ &entry.q }</h3>
                            <p>{ &entry.a }</p>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(PricingCta)]
fn pricing_cta(props: &SectionProps) -> Html {
    let pricing = &props.content.pricing;
    let booking = props.content.links.current_booking_url();

    html! {
        <section class="pricing">
            <FadeIn>
                <h2 class="section-title">
                    { &pricing.title_lead }<br />
                    <span class="gold-text">{ &pricing.title_accent }</span>
                </h2>
            </FadeIn>
            <FadeIn delay_ms={200}>
                <div class="price-card">
                    <div class="price">{ &pricing.price }</div>
                    <div class="price-note">{ &pricing.price_note }</div>
                    <div class="includes">
                        { for pricing.includes.iter().map(|item| html! {
                            <div class="include"><span class="check">{"✓"}</span>{ item }</div>
                        }) }
                    </div>
                    <a href={booking} class="cta-button">{ &pricing.cta }</a>
                    <p class="fine-print">{ &pricing.disclaimer }</p>
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let terms = use_dialog("terms");
    let privacy = use_dialog("privacy");

    let Some(content) = content else {
        return html! {};
    };

    let links = &content.links;
    let legal = &content.legal;
    let copyright = copyright_line(&content.brand_name(), current_year());

    html! {
        <div class="landing-page">
            <div class="glow-layer">
                <div class="glow glow-top"></div>
                <div class="glow glow-bottom"></div>
            </div>

            <Hero content={content.clone()} />
            <Pillars content={content.clone()} />
            <Breakdown content={content.clone()} />
            <Deliverables content={content.clone()} />
            <About content={content.clone()} />
            <Testimonials content={content.clone()} />
            <FaqList content={content.clone()} />
            <PricingCta content={content.clone()} />

            <footer class="site-footer">
                <div class="footer-brand">
                    <h3>{ &content.brand.name_lead }<span class="gold-text">{ &content.brand.name_accent }</span></h3>
                    <p>{ &content.brand.tagline }</p>
                    <a href={links.mailto()} class="footer-email">{ &links.email }</a>
                </div>
                <div class="footer-social">
                    <a href={links.instagram.clone()} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                        </svg>
                    </a>
                </div>
                <div class="footer-legal">
                    <button onclick={terms.on_open()}>{"Terms and Conditions"}</button>
                    <button onclick={privacy.on_open()}>{"Privacy Policy"}</button>
                </div>
                <div class="footer-fine-print">
                    <p>{ copyright }</p>
                    <p>{ &content.footer.disclaimer }</p>
                </div>
            </footer>

            <Dialog open={terms.is_open()} title={legal.terms.title.clone()} on_close={terms.on_close()}>
                <TermsBody terms={legal.terms.clone()} />
            </Dialog>
            <Dialog open={privacy.is_open()} title={legal.privacy.title.clone()} on_close={privacy.on_close()}>
                <PrivacyBody privacy={legal.privacy.clone()} email={links.email.clone()} />
            </Dialog>

            <style>
                { landing_styles() }
            </style>
        </div>
    }
}

fn landing_styles() -> String {
    format!(
        r#"
        .reveal {{
            opacity: 0;
            transform: translateY(3rem);
            transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;
        }}
        .reveal.revealed {{
            opacity: 1;
            transform: translateY(0);
        }}
        @media (prefers-reduced-motion: reduce) {{
            .reveal {{ transition: none; }}
        }}
        {rest}
        "#,
        ms = config::REVEAL_TRANSITION_MS,
        rest = LANDING_CSS,
    )
}

const LANDING_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
    background: #000;
    color: #fff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    overflow-x: hidden;
}

.glow-layer {
    position: fixed;
    inset: 0;
    pointer-events: none;
}

.glow {
    position: absolute;
    width: 40rem;
    height: 40rem;
    border-radius: 50%;
    filter: blur(120px);
}

.glow-top { top: -10%; left: -10%; background: rgba(234, 179, 8, 0.1); }
.glow-bottom { bottom: -10%; right: -10%; background: rgba(217, 119, 6, 0.1); }

.gold-text {
    background: linear-gradient(90deg, #fde047, #facc15, #f59e0b);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

section {
    position: relative;
    padding: 6rem 1.5rem;
    max-width: 72rem;
    margin: 0 auto;
}

.section-title {
    font-size: clamp(2.25rem, 5vw, 3.5rem);
    font-weight: 900;
    text-align: center;
    margin-bottom: 4rem;
    letter-spacing: -0.02em;
}

.section-heading { text-align: center; margin-bottom: 4rem; }
.section-heading .section-title { margin-bottom: 1rem; }
.section-heading p { color: #a1a1aa; font-size: 1.25rem; font-weight: 300; }

.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    background: linear-gradient(90deg, #facc15, #f59e0b);
    color: #000;
    font-weight: 900;
    font-size: 1.25rem;
    padding: 1.25rem 2.5rem;
    border-radius: 9999px;
    text-decoration: none;
    box-shadow: 0 0 40px rgba(251, 191, 36, 0.3);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.cta-button:hover {
    transform: scale(1.05);
    box-shadow: 0 0 60px rgba(251, 191, 36, 0.5);
}

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding-top: 8rem;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
    width: 100%;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    background: rgba(234, 179, 8, 0.1);
    border: 1px solid rgba(234, 179, 8, 0.2);
    color: #fde047;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 2rem;
}

.pulse-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: #facc15;
    animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}

.hero h1 {
    font-size: clamp(3rem, 7vw, 4.5rem);
    font-weight: 900;
    line-height: 1.1;
    margin-bottom: 1.5rem;
}

.hero-subheadline { font-size: 1.75rem; font-weight: 700; color: #e4e4e7; margin-bottom: 2rem; }
.hero-subheadline .advisor { color: #facc15; border-bottom: 2px solid rgba(250, 204, 21, 0.3); }
.hero-intro { font-size: 1.25rem; color: #a1a1aa; font-weight: 300; max-width: 32rem; margin-bottom: 2.5rem; }
.hero-cta { margin-bottom: 3rem; }

.hero-stats {
    display: flex;
    gap: 3rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding-top: 2rem;
}

.stat-value { font-size: 2.25rem; font-weight: 900; }
.stat-label { font-size: 0.875rem; color: #71717a; text-transform: uppercase; letter-spacing: 0.05em; }

.hero-video {
    position: relative;
    max-width: 28rem;
    margin: 0 auto;
    aspect-ratio: 11 / 16;
    border-radius: 2.5rem;
    overflow: hidden;
    background: #18181b;
    box-shadow: 0 0 60px rgba(251, 191, 36, 0.25);
}

.hero-video video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }

.card-grid { display: grid; gap: 2rem; }
.card-grid.three { grid-template-columns: repeat(3, 1fr); }
.card-grid.two { grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }

.pillar-card, .deliverable-card, .testimonial-card, .faq-entry, .breakdown-block, .price-card {
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 1.5rem;
    padding: 2rem;
    background: rgba(24, 24, 27, 0.5);
    transition: border-color 0.3s ease, transform 0.3s ease;
    height: 100%;
}

.pillar-card:hover, .deliverable-card:hover, .faq-entry:hover, .breakdown-block:hover {
    border-color: rgba(234, 179, 8, 0.4);
}

.pillar-card { text-align: center; }
.pillar-card:hover { transform: translateY(-0.5rem); }
.pillar-letter { font-size: 4.5rem; font-weight: 900; font-family: serif; color: rgba(250, 204, 21, 0.3); margin-bottom: 1.5rem; }
.pillar-card h3 { font-size: 1.5rem; margin-bottom: 1rem; }
.pillar-card p, .deliverable-card p { color: #a1a1aa; line-height: 1.6; }
.deliverable-card h3 { color: #facc15; font-size: 1.25rem; margin-bottom: 0.75rem; }

.breakdown-list { display: flex; flex-direction: column; gap: 1.5rem; }
.breakdown-block { display: flex; gap: 2rem; border-left: 4px solid #f59e0b; }
.breakdown-when { flex: 1; }
.time-chip { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 0.25rem; background: rgba(234, 179, 8, 0.1); color: #facc15; font-weight: 700; font-size: 0.875rem; margin-bottom: 0.5rem; }
.breakdown-when h3 { font-size: 1.5rem; font-weight: 900; }

.check-list { flex: 2; list-style: none; padding: 0; margin: 0; }
.check-list li { display: flex; gap: 1rem; color: #d4d4d8; font-weight: 300; margin-bottom: 1rem; }
.check { color: #facc15; flex-shrink: 0; }

.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
.about-photo img { width: 100%; border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); }
.about-bio h3 { font-size: 1.875rem; margin-bottom: 1.5rem; }
.about-bio p { color: #d4d4d8; font-size: 1.125rem; line-height: 1.7; font-weight: 300; margin-bottom: 1.5rem; }
.credential { display: flex; gap: 0.75rem; padding: 0.75rem; background: rgba(255, 255, 255, 0.05); border-radius: 0.5rem; margin-bottom: 1rem; font-weight: 500; }

.testimonial-card { display: flex; flex-direction: column; position: relative; }
.stars { color: #facc15; letter-spacing: 0.2em; margin-bottom: 1rem; }
.quote { color: #d4d4d8; font-size: 1.125rem; font-style: italic; font-weight: 300; line-height: 1.7; flex-grow: 1; margin-bottom: 2rem; }
.client { border-top: 1px solid rgba(255, 255, 255, 0.05); padding-top: 1rem; }
.client-name { font-weight: 700; font-size: 1.125rem; }
.client-role { color: #facc15; font-size: 0.875rem; }

.faq-list { max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.faq-entry { background: #000; }
.faq-entry h3 { font-size: 1.25rem; margin-bottom: 0.75rem; }
.faq-entry p { color: #a1a1aa; font-size: 1.125rem; font-weight: 300; padding-left: 2rem; border-left: 2px solid #27272a; }

.pricing { text-align: center; max-width: 56rem; }
.price-card { border-radius: 3rem; padding: 4rem; background: #18181b; }
.price { font-size: 4.5rem; font-weight: 900; color: #facc15; }
.price-note { color: #a1a1aa; text-transform: uppercase; letter-spacing: 0.1em; margin-bottom: 2.5rem; }
.includes { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; text-align: left; margin-bottom: 3rem; }
.include { display: flex; gap: 0.75rem; background: rgba(255, 255, 255, 0.05); border-radius: 0.5rem; padding: 1rem; font-weight: 600; }
.fine-print { color: #71717a; font-size: 0.875rem; margin-top: 2rem; }

.site-footer {
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding: 4rem 1.5rem;
    text-align: center;
}

.footer-brand h3 { font-size: 1.875rem; font-weight: 900; margin-bottom: 1rem; }
.footer-brand p { color: #71717a; margin-bottom: 1.5rem; }
.footer-email { color: #fff; font-size: 1.25rem; font-weight: 700; text-underline-offset: 4px; }
.footer-email:hover { color: #facc15; }
.footer-social { margin: 3rem 0; }
.footer-social a { display: inline-flex; padding: 1rem; border-radius: 50%; background: #18181b; color: #a1a1aa; }
.footer-social a:hover { color: #fff; }
.footer-legal { display: flex; justify-content: center; gap: 2rem; margin-bottom: 2rem; }
.footer-legal button { background: none; border: none; color: #71717a; font-size: 0.875rem; cursor: pointer; }
.footer-legal button:hover { color: #fff; }
.footer-fine-print { color: #52525b; font-size: 0.75rem; max-width: 42rem; margin: 0 auto; padding-top: 2rem; border-top: 1px solid #18181b; }

.dialog-root {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.dialog-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.9);
    backdrop-filter: blur(4px);
}

.dialog-panel {
    position: relative;
    width: 100%;
    max-width: 42rem;
    max-height: 90vh;
    overflow-y: auto;
    background: #18181b;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 0 50px rgba(234, 179, 8, 0.2);
    animation: dialogIn 0.3s ease-out;
}

@keyframes dialogIn {
    from { opacity: 0; transform: scale(0.95); }
    to { opacity: 1; transform: scale(1); }
}

.dialog-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid rgba(255, 255, 255, 0.1); padding-bottom: 1rem; margin-bottom: 1.5rem; }
.dialog-header h2 { font-size: 1.875rem; font-weight: 900; }
.dialog-dismiss { background: none; border: none; color: #a1a1aa; font-size: 1.5rem; cursor: pointer; border-radius: 50%; padding: 0.5rem; }
.dialog-dismiss:hover { color: #fff; background: rgba(255, 255, 255, 0.1); }
.dialog-body { color: #d4d4d8; font-size: 1.125rem; line-height: 1.7; font-weight: 300; }
.dialog-body p, .dialog-body li { margin-bottom: 1rem; }
.dialog-body ol li::marker { color: #eab308; }
.dialog-footer { margin-top: 2rem; padding-top: 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
.dialog-close { width: 100%; background: linear-gradient(90deg, #facc15, #f59e0b); color: #000; font-weight: 700; padding: 1rem; border: none; border-radius: 0.75rem; cursor: pointer; }

@media (max-width: 768px) {
    .hero-grid, .about-grid, .card-grid.three, .card-grid.two, .includes {
        grid-template-columns: 1fr;
    }
    .breakdown-block { flex-direction: column; }
    .price-card { padding: 2.5rem 1.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_use_configured_transition() {
        let css = landing_styles();
        assert!(css.contains("transition: opacity 1000ms ease-out, transform 1000ms ease-out"));
        assert!(css.contains(".reveal.revealed"));
        assert!(css.contains(".dialog-root"));
    }
}
