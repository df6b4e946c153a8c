use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::glowing_cursor::GlowingCursor;
use crate::components::link_card::LinkCard;
use crate::content::LandingContent;

const GOVERNANCE_URL: &str = "https://vote.aleo.org/";
const BLOG_URL: &str = "https://aleo.org/blog/";

pub fn events_toggle_label(show_all: bool) -> &'static str {
    if show_all {
        "Show Less Events"
    } else {
        "Show More Events"
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| LandingContent::bundled(), ());
    let show_all_events = use_bool_toggle(false);
    let year = chrono::Local::now().year();

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

    let toggle_events = {
        let show_all_events = show_all_events.clone();
        Callback::from(move |_: MouseEvent| show_all_events.toggle())
    };

    let events = content.visible_events(*show_all_events);

    html! {
        <div class="aleo-landing">
            <GlowingCursor />

            <header class="site-header">
                <nav class="nav-content">
                    <div class="brand">
                        <div class="brand-mark"><span>{"A"}</span></div>
                        <div class="brand-tagline">{"Aleo — Private by design"}</div>
                    </div>
                    <div class="nav-links">
                        <a href="#about">{"About"}</a>
                        <a href="#features">{"Features"}</a>
                        <a href="#events">{"Events"}</a>
                        <a href="#community">{"Community"}</a>
                    </div>
                </nav>
            </header>

            <main>
                <section id="about" class="section">
                    <h2>{"About Aleo"}</h2>
                    <p class="lead">
                        {"Aleo enables developers to build private applications with zero-knowledge proofs executed off-chain and verified on-chain. Its mission is to make privacy-preserving computing accessible to everyone, empowering users to control their own data."}
                    </p>
                </section>

                <section id="features" class="section">
                    <h3>{"Features"}</h3>
                    <div class="grid three">
                        <div class="feature-card">
                            <h4>{"Private by Default"}</h4>
                            <p>{"All application logic can be executed privately using zk-proofs, ensuring total confidentiality for users and developers alike."}</p>
                        </div>
                        <div class="feature-card">
                            <h4>{"Developer-First"}</h4>
                            <p>{"Aleo provides powerful SDKs, local development tools, and documentation to help developers build privacy-preserving apps faster."}</p>
                        </div>
                        <div class="feature-card">
                            <h4>{"Composable & Secure"}</h4>
                            <p>{"Applications on Aleo can interoperate securely, enabling scalable private DeFi and beyond with modular, verifiable components."}</p>
                        </div>
                    </div>
                </section>

                <section id="events" class="section">
                    <h3>{"Aleo Global Events"}</h3>
                    <div class="grid three">
                        { for events.iter().map(|event| html! {
                            <LinkCard link={event.link.clone()}>
                                <div class="card-meta">{ event.time.clone() }</div>
                                <div class="card-sub">{ event.location.clone() }</div>
                                <h4 class="card-title">{ event.title.clone() }</h4>
                            </LinkCard>
                        }) }
                    </div>
                    <div class="centered">
                        <button class="accent-button" onclick={toggle_events}>
                            { events_toggle_label(*show_all_events) }
                        </button>
                    </div>
                </section>

                <section id="community" class="section">
                    <h3>{"Aleo Community Hub"}</h3>
                    <div class="grid three">
                        { for content.posts.iter().enumerate().map(|(idx, post)| html! {
                            <LinkCard link={post.link.clone()}>
                                <div class="card-meta">{ format!("Tweet #{}", idx + 1) }</div>
                                <div class="card-sub">{ post.date.clone() }</div>
                                <p class="card-text">{ post.text.clone() }</p>
                                <h4 class="card-title">{"View post on X"}</h4>
                            </LinkCard>
                        }) }
                    </div>
                </section>

                <section id="governance" class="section">
                    <div class="governance-panel">
                        <h3>{"Aleo Governance"}</h3>
                        <p>{"Propose. Vote. Change. Shape the future of the Aleo Network."}</p>
                        <a href={GOVERNANCE_URL} target="_blank" rel="noreferrer" class="accent-button">
                            {"Join Governance Platform"}
                        </a>
                    </div>
                </section>

                <section id="articles" class="section">
                    <h3>{"Aleo Blog Highlights"}</h3>
                    <div class="grid three">
                        { for content.articles.iter().map(|article| html! {
                            <LinkCard link={article.link.clone()}>
                                <div class="card-meta">{ article.date.clone() }</div>
                                <h4 class="card-title">{ article.title.clone() }</h4>
                            </LinkCard>
                        }) }
                    </div>
                    <div class="centered">
                        <a href={BLOG_URL} target="_blank" rel="noreferrer" class="accent-button">
                            {"View More Articles"}
                        </a>
                    </div>
                </section>

                <footer class="site-footer">
                    { format!("© {} Aleo — Community & Governance", year) }
                </footer>
            </main>

            <style>{ LANDING_CSS }</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
body {
    margin: 0;
    background: #000;
}
.aleo-landing {
    position: relative;
    min-height: 100vh;
    font-family: system-ui, -apple-system, sans-serif;
    color: #f3f4f6;
    background: #000;
    overflow-x: hidden;
}
.site-header {
    position: relative;
    z-index: 30;
}
.nav-content {
    max-width: 72rem;
    margin: 0 auto;
    padding: 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}
.brand-mark {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 0.375rem;
    background: linear-gradient(to top right, #121216, #1b1b20);
    border: 1px solid rgba(255, 255, 255, 0.06);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.05em;
}
.brand-tagline {
    font-size: 0.875rem;
    color: #d1d5db;
}
.nav-links {
    display: flex;
    gap: 1rem;
    font-size: 0.875rem;
}
.nav-links a {
    color: #9ca3af;
    text-decoration: none;
}
.nav-links a:hover {
    color: #fff;
}
main {
    position: relative;
    z-index: 20;
}
.section {
    max-width: 72rem;
    margin: 0 auto;
    padding: 5rem 1.5rem;
}
.section h2, .section h3 {
    color: #fff;
    font-weight: 600;
    font-size: 1.875rem;
    margin-bottom: 2rem;
}
.lead {
    color: #d1d5db;
    max-width: 48rem;
}
.grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}
.feature-card {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    padding: 1.5rem;
}
.feature-card h4 {
    color: #fff;
    font-size: 1.125rem;
    margin: 0 0 0.5rem;
}
.feature-card p {
    color: #9ca3af;
    font-size: 0.875rem;
}
.card-meta {
    font-size: 0.875rem;
    color: #9ca3af;
}
.card-sub {
    font-size: 0.75rem;
    color: #6b7280;
}
.card-text {
    color: #d1d5db;
    font-size: 0.875rem;
}
.card-title {
    margin-top: 0.75rem;
    font-size: 1.125rem;
    font-weight: 600;
    color: #fff;
    transition: color 0.3s ease;
}
.link-card {
    cursor: pointer;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    padding: 1.5rem;
    transition: all 0.3s ease;
    animation: card-enter 0.4s ease both;
}
.link-card:hover {
    background: rgba(238, 255, 168, 0.1);
    box-shadow: 0 0 25px #EEFFA8aa;
    transform: scale(1.03);
}
.link-card:hover .card-title {
    color: #EEFFA8;
}
@keyframes card-enter {
    from {
        opacity: 0;
        transform: scale(0.95);
    }
    to {
        opacity: 1;
        transform: scale(1);
    }
}
.centered {
    text-align: center;
    margin-top: 2.5rem;
}
.accent-button {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    background: rgba(238, 255, 168, 0.1);
    border: 1px solid rgba(238, 255, 168, 0.3);
    border-radius: 0.75rem;
    color: #EEFFA8;
    text-decoration: none;
    font-size: 1rem;
    cursor: pointer;
    transition: background 0.2s ease;
}
.accent-button:hover {
    background: rgba(238, 255, 168, 0.2);
}
.governance-panel {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    padding: 2.5rem;
    text-align: center;
}
.governance-panel p {
    color: #d1d5db;
    max-width: 42rem;
    margin: 0 auto 1.5rem;
}
.site-footer {
    max-width: 72rem;
    margin: 0 auto;
    padding: 3rem 1.5rem;
    text-align: center;
    font-size: 0.875rem;
    color: #6b7280;
}

@media (min-width: 768px) {
    .grid.three {
        grid-template-columns: repeat(2, 1fr);
    }
}
@media (min-width: 1024px) {
    .grid.three {
        grid-template-columns: repeat(3, 1fr);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::link_card::LINK_CARD_CLASS;

    #[test]
    fn toggle_label_follows_state() {
        assert_eq!(events_toggle_label(false), "Show More Events");
        assert_eq!(events_toggle_label(true), "Show Less Events");
    }

    #[test]
    fn revealed_cards_fade_and_scale_in() {
        let card_rule = format!(".{} {{", LINK_CARD_CLASS);
        let start = LANDING_CSS.find(&card_rule).expect("card rule present");
        let rule = &LANDING_CSS[start..start + LANDING_CSS[start..].find('}').unwrap_or(0)];
        assert!(rule.contains("animation: card-enter 0.4s"));

        let keyframes = LANDING_CSS
            .find("@keyframes card-enter")
            .map(|at| &LANDING_CSS[at..])
            .expect("keyframes present");
        assert!(keyframes.contains("opacity: 0;"));
        assert!(keyframes.contains("transform: scale(0.95);"));
        assert!(keyframes.contains("transform: scale(1);"));
    }
}
