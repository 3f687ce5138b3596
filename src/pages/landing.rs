use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::accordion::FaqItem;
use crate::components::booking_modal::BookingModal;
use crate::components::icons::{Icon, SvgIcon};
use crate::components::navbar::Navbar;
use crate::content;
use crate::state::{FaqState, ModalState};

// How far above the bottom edge an element has to rise before it fades in.
const REVEAL_MARGIN: f64 = 50.0;

fn reveal_elements() {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            if let Ok(nodes) = document.query_selector_all(".reveal") {
                for index in 0..nodes.length() {
                    if let Some(node) = nodes.item(index) {
                        if let Ok(element) = node.dyn_into::<Element>() {
                            if element.get_bounding_client_rect().top() < viewport - REVEAL_MARGIN {
                                let _ = element.class_list().add_1("visible");
                            }
                        }
                    }
                }
            }
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_state(ModalState::default);
    let faq = use_state(FaqState::new);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (), // Empty dependencies array means this effect runs only once on mount
    );

    use_effect_with_deps(
        move |_| {
            let listener = Closure::<dyn Fn()>::new(move || {
                reveal_elements();
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }
            // First pass before any scrolling, so above-the-fold content shows.
            reveal_elements();
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *modal;
            next.open();
            modal.set(next);
        })
    };

    let on_get_started = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut next = *modal;
            next.open();
            modal.set(next);
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *modal;
            next.close();
            modal.set(next);
        })
    };

    // The contact form has nowhere to go yet, so just stop the page reload.
    let swallow_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="landing-page">
            if modal.is_open() {
                <BookingModal on_close={close_modal} />
            }

            <Navbar on_get_started={on_get_started} />

            <section class="hero-section">
                <div class="hero-grid">
                    <div class="hero-left">
                        <div class="orbit">
                            <div class="orbit-ring"></div>
                            <div class="orbit-star">
                                <SvgIcon icon={Icon::Star} size={24} filled=true />
                            </div>
                        </div>
                        <p class="hero-note">
                            {"You "}<strong>{"don't"}</strong>{" have to "}
                            <span class="squiggle">{"struggle"}</span>
                            {" in silence."}
                        </p>
                        <button class="watch-intro">
                            <span class="play-bubble">
                                <SvgIcon icon={Icon::Play} size={14} filled=true />
                            </span>
                            {"WATCH INTRO"}
                        </button>
                    </div>

                    <div class="hero-center">
                        <h1 class="hero-title">
                            {"Mental "}<span class="hero-spark">{"✦"}</span>
                            <br />
                            {"Health"}
                        </h1>
                        <div class="hero-media">
                            <div class="hero-float">
                                <img
                                    class="hero-illustration"
                                    src={content::HERO_IMAGE_URL}
                                    alt="Mental health illustration"
                                />
                            </div>
                        </div>
                    </div>

                    <div class="hero-right">
                        <h3 class="hero-balance">{"Balance"}</h3>
                        <p>{"Finding stability between your inner peace and the chaotic outer world."}</p>
                    </div>
                </div>
            </section>

            <div class="logo-strip">
                <div class="logo-track">
                    // Track is doubled so the marquee loops without a gap.
                    { for content::TRUSTED_BY.iter().chain(content::TRUSTED_BY.iter()).map(|name| html! {
                        <span class="logo-name">{ *name }</span>
                    }) }
                </div>
            </div>

            <section id="about" class="about-section">
                <div class="about-grid">
                    <div class="about-media reveal">
                        <img src={content::ABOUT_IMAGE_URL} alt="A calming office space" />
                        <div class="about-quote">
                            <p>{"\"The first step towards healing is realizing you don't have to take it alone.\""}</p>
                        </div>
                    </div>
                    <div class="about-copy reveal">
                        <span class="badge">{"Our Mission"}</span>
                        <h2>
                            {"Bridging the gap between "}
                            <span class="accent-italic">{"chaos"}</span>
                            {" and clarity."}
                        </h2>
                        <p class="about-text">
                            {"Raft was born from a simple idea: mental healthcare shouldn't feel like a clinical transaction. It should feel like a conversation with a trusted friend who happens to be an expert."}
                        </p>
                        <ul class="mission-list">
                            { for content::MISSION_POINTS.iter().map(|point| html! {
                                <li>
                                    <SvgIcon icon={Icon::CheckCircle} size={20} class={classes!("check-icon")} />
                                    { *point }
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <div class="services-intro reveal">
                    <h2>{"Ways we can help"}</h2>
                    <p>{"We offer a variety of therapeutic approaches tailored to your unique mind."}</p>
                </div>
                <div class="services-grid">
                    { for content::SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div class="reveal" style={format!("transition-delay: {}ms", index * 100)}>
                            <div class="service-card">
                                <div class="service-icon">
                                    <SvgIcon icon={service.icon} size={24} />
                                </div>
                                <h3>{ service.title }</h3>
                                <p>{ service.blurb }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="journey-section">
                <div class="journey-grid">
                    <div class="journey-pitch reveal">
                        <h2>{"Your journey,"}<br />{" simplified."}</h2>
                        <p>{"We've removed the hurdles. Getting help is now as easy as booking a cab."}</p>
                        <button class="journey-cta" onclick={open_modal}>{"Start Matching"}</button>
                    </div>
                    <div class="journey-steps">
                        { for content::PROCESS_STEPS.iter().map(|step| html! {
                            <div class="journey-step reveal">
                                <span class="step-number">{ step.number }</span>
                                <div>
                                    <h3>{ step.title }</h3>
                                    <p>{ step.blurb }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="team" class="team-section">
                <div class="team-inner">
                    <div class="team-header reveal">
                        <div>
                            <span class="team-eyebrow">{"Our Specialists"}</span>
                            <h2>{"Meet the minds."}</h2>
                        </div>
                        <p class="team-blurb">{"Licensed, vetted, and deeply empathetic experts ready to guide you."}</p>
                    </div>
                    <div class="team-grid">
                        { for content::TEAM.iter().enumerate().map(|(index, member)| html! {
                            <div class="reveal" style={format!("transition-delay: {}ms", index * 150)}>
                                <div class="team-card">
                                    <div class="team-photo-frame">
                                        <img src={member.photo} alt={member.name} />
                                        <div class="team-arrow">
                                            <SvgIcon icon={Icon::MoveRight} size={20} />
                                        </div>
                                    </div>
                                    <h3>{ member.name }</h3>
                                    <p>{ member.role }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="faq" class="faq-section">
                <h2 class="section-heading">{"Common Questions"}</h2>
                <div class="faq-list">
                    { for content::FAQS.iter().enumerate().map(|(index, entry)| {
                        let on_toggle = {
                            let faq = faq.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                let mut next = *faq;
                                next.toggle(index);
                                faq.set(next);
                            })
                        };
                        html! {
                            <FaqItem
                                question={entry.question}
                                answer={entry.answer}
                                open={faq.is_expanded(index)}
                                on_toggle={on_toggle}
                            />
                        }
                    }) }
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div class="footer-pitch">
                        <h2>{"Let's connect."}</h2>
                        <p>{"Ready to start? Or just have a question? We're here."}</p>
                        <div class="contact-lines">
                            <div class="contact-line">
                                <SvgIcon icon={Icon::Mail} size={20} />
                                { content::CONTACT_EMAIL }
                            </div>
                            <div class="contact-line">
                                <SvgIcon icon={Icon::Phone} size={20} />
                                { content::CONTACT_PHONE }
                            </div>
                            <div class="contact-line">
                                <SvgIcon icon={Icon::MapPin} size={20} />
                                { content::CONTACT_ADDRESS }
                            </div>
                        </div>
                    </div>
                    <div class="footer-form-panel">
                        <form class="contact-form" onsubmit={swallow_submit}>
                            <div class="form-row">
                                <input type="text" placeholder="Name" />
                                <input type="email" placeholder="Email" />
                            </div>
                            <textarea placeholder="How can we help?" rows="4"></textarea>
                            <button type="submit">{"Send Message"}</button>
                        </form>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 Raft Mental Health Inc."}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #F0F4F7;
                    color: #1A1A1A;
                    overflow-x: hidden;
                }

                #about, #services, #team, #faq {
                    scroll-margin-top: 80px;
                }

                /* Navigation */
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(240, 244, 247, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 16px 24px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    cursor: pointer;
                }

                .logo-mark {
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    background: #1A1A1A;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .logo-pill {
                    width: 16px;
                    height: 8px;
                    border-radius: 99px;
                    background: #fff;
                    opacity: 0.8;
                }

                .logo-word {
                    font-family: 'Playfair Display', serif;
                    font-size: 24px;
                    font-weight: 700;
                    letter-spacing: -0.5px;
                }

                .nav-links { display: none; }

                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 14px;
                    font-weight: 500;
                    color: #1A1A1A;
                    padding: 4px 2px;
                    opacity: 0.7;
                    transition: opacity 0.2s;
                }

                .nav-link:hover { opacity: 1; }

                .nav-actions { display: none; }

                .nav-login {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 14px;
                    font-weight: 600;
                    color: #1A1A1A;
                    transition: opacity 0.2s;
                }

                .nav-login:hover { opacity: 0.7; }

                .nav-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    background: #1A1A1A;
                    color: #fff;
                    border: none;
                    border-radius: 99px;
                    padding: 10px 24px;
                    font-size: 14px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s, transform 0.2s;
                }

                .nav-cta:hover {
                    background: #333;
                    transform: translateY(-2px);
                }

                .burger-menu {
                    background: none;
                    border: none;
                    cursor: pointer;
                    display: flex;
                    padding: 4px;
                    color: #1A1A1A;
                }

                .mobile-menu {
                    position: fixed;
                    top: 64px;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 49;
                    background: #F0F4F7;
                    display: flex;
                    flex-direction: column;
                    padding: 32px 24px;
                    gap: 8px;
                    animation: menuIn 0.25s ease-out;
                }

                .mobile-link {
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 30px;
                    font-family: 'Playfair Display', serif;
                    font-weight: 500;
                    color: #1A1A1A;
                    padding: 12px 0;
                    cursor: pointer;
                }

                .mobile-menu hr {
                    border: none;
                    border-top: 1px solid rgba(26, 26, 26, 0.1);
                    margin: 16px 0;
                    width: 100%;
                }

                .mobile-cta {
                    background: #1A1A1A;
                    color: #fff;
                    border: none;
                    border-radius: 99px;
                    padding: 16px;
                    font-size: 17px;
                    font-weight: 700;
                    cursor: pointer;
                }

                /* Hero */
                .hero-section { padding: 128px 24px 80px; }

                .hero-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 48px;
                    animation: heroEnter 1s ease-out;
                }

                .hero-left {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 24px;
                }

                .orbit {
                    position: relative;
                    width: 80px;
                    height: 80px;
                }

                .orbit-ring {
                    position: absolute;
                    inset: 0;
                    border: 1px dashed #1A1A1A;
                    border-radius: 50%;
                    animation: spin 20s linear infinite;
                }

                .orbit-star {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #1A1A1A;
                }

                .hero-note {
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.4;
                    max-width: 240px;
                    margin: 0;
                }

                .squiggle {
                    text-decoration: underline wavy #FB923C;
                    text-underline-offset: 4px;
                }

                .watch-intro {
                    display: inline-flex;
                    align-items: center;
                    gap: 12px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 13px;
                    letter-spacing: 2px;
                    font-weight: 700;
                    color: #1A1A1A;
                }

                .watch-intro:hover .play-bubble { transform: scale(1.1); }

                .play-bubble {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #1A1A1A;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.2s;
                }

                .hero-center { text-align: center; }

                .hero-title {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(72px, 13vw, 128px);
                    line-height: 0.9;
                    letter-spacing: -2px;
                    font-weight: 500;
                    margin: 0 0 24px;
                }

                .hero-spark {
                    color: #EAB308;
                    display: inline-block;
                    animation: pulse 2s ease-in-out infinite;
                }

                .hero-media {
                    display: flex;
                    justify-content: center;
                }

                .hero-float { animation: float 6s ease-in-out infinite; }

                .hero-illustration {
                    width: min(460px, 85vw);
                    aspect-ratio: 1;
                    object-fit: cover;
                    border: 8px solid rgba(255, 255, 255, 0.3);
                    border-radius: 30% 70% 70% 30% / 30% 30% 70% 70%;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    display: block;
                }

                .hero-right {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 8px;
                }

                .hero-balance {
                    font-family: 'Playfair Display', serif;
                    font-style: italic;
                    font-size: 34px;
                    font-weight: 500;
                    margin: 0;
                }

                .hero-right p {
                    font-size: 14px;
                    opacity: 0.6;
                    line-height: 1.6;
                    max-width: 200px;
                    margin: 0;
                }

                /* Logo strip */
                .logo-strip {
                    border-top: 1px solid rgba(0, 0, 0, 0.05);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
                    padding: 32px 0;
                    overflow: hidden;
                    background: #fff;
                }

                .logo-track {
                    display: flex;
                    width: max-content;
                    animation: marquee 30s linear infinite;
                    opacity: 0.4;
                    filter: grayscale(1);
                }

                .logo-name {
                    font-family: 'Playfair Display', serif;
                    font-size: 20px;
                    font-weight: 700;
                    white-space: nowrap;
                    padding: 0 32px;
                }

                /* About */
                .about-section { padding: 96px 24px; }

                .about-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 64px;
                }

                .about-media { position: relative; }

                .about-media img {
                    width: 100%;
                    height: 500px;
                    object-fit: cover;
                    border-radius: 48px;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    display: block;
                }

                .about-quote {
                    display: none;
                    position: absolute;
                    bottom: -40px;
                    right: -24px;
                    background: #fff;
                    border-radius: 16px;
                    padding: 24px;
                    max-width: 320px;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    font-family: 'Playfair Display', serif;
                    font-style: italic;
                    font-size: 18px;
                    line-height: 1.5;
                }

                .about-quote p { margin: 0; }

                .about-copy {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 24px;
                }

                .badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    border: 1px solid rgba(26, 26, 26, 0.1);
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(4px);
                    border-radius: 99px;
                    padding: 8px 16px;
                    font-size: 12px;
                    font-weight: 700;
                    letter-spacing: 1px;
                    text-transform: uppercase;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .about-copy h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(36px, 5vw, 48px);
                    font-weight: 500;
                    line-height: 1.15;
                    margin: 0;
                }

                .accent-italic {
                    font-style: italic;
                    color: #9333EA;
                }

                .about-text {
                    font-size: 18px;
                    opacity: 0.7;
                    line-height: 1.7;
                    margin: 0;
                }

                .mission-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .mission-list li {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    font-weight: 500;
                }

                .check-icon {
                    color: #22C55E;
                    flex-shrink: 0;
                }

                /* Services */
                .services-section {
                    max-width: 1200px;
                    margin: 48px auto;
                    padding: 96px 24px;
                    background: #fff;
                    border-radius: 48px;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .services-intro {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 64px;
                }

                .services-intro h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(36px, 5vw, 48px);
                    font-weight: 500;
                    margin: 0 0 20px;
                }

                .services-intro p {
                    opacity: 0.6;
                    margin: 0;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 32px;
                }

                .service-card {
                    background: #F0F4F7;
                    border-radius: 24px;
                    padding: 32px;
                    height: 100%;
                    cursor: pointer;
                    transition: transform 0.3s, background 0.3s, color 0.3s;
                }

                .service-card:hover {
                    background: #1A1A1A;
                    color: #fff;
                    transform: translateY(-5px);
                }

                .service-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #fff;
                    color: #1A1A1A;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 24px;
                    transition: background 0.3s, color 0.3s;
                }

                .service-card:hover .service-icon {
                    background: #333;
                    color: #fff;
                }

                .service-card h3 {
                    font-size: 20px;
                    font-weight: 700;
                    margin: 0 0 12px;
                }

                .service-card p {
                    font-size: 14px;
                    line-height: 1.6;
                    opacity: 0.6;
                    margin: 0;
                }

                .service-card:hover p { opacity: 0.8; }

                /* Journey */
                .journey-section { padding: 96px 24px; }

                .journey-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 48px;
                }

                .journey-pitch h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(40px, 6vw, 48px);
                    font-weight: 500;
                    line-height: 1.1;
                    margin: 0 0 24px;
                }

                .journey-pitch p {
                    font-size: 18px;
                    opacity: 0.6;
                    line-height: 1.7;
                    max-width: 380px;
                    margin: 0 0 32px;
                }

                .journey-cta {
                    background: #1A1A1A;
                    color: #fff;
                    border: none;
                    border-radius: 99px;
                    padding: 16px 32px;
                    font-size: 16px;
                    font-weight: 700;
                    cursor: pointer;
                    transition: transform 0.2s;
                }

                .journey-cta:hover { transform: scale(1.05); }

                .journey-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 48px;
                }

                .journey-step {
                    display: flex;
                    gap: 24px;
                    align-items: flex-start;
                    border-bottom: 1px solid rgba(26, 26, 26, 0.1);
                    padding-bottom: 48px;
                }

                .journey-step:last-child {
                    border-bottom: none;
                    padding-bottom: 0;
                }

                .step-number {
                    font-family: 'Playfair Display', serif;
                    font-size: 36px;
                    color: #C084FC;
                    opacity: 0.5;
                }

                .journey-step h3 {
                    margin: 0 0 12px;
                    font-size: 24px;
                    font-weight: 700;
                }

                .journey-step p {
                    margin: 0;
                    opacity: 0.6;
                    line-height: 1.7;
                    max-width: 448px;
                }

                /* Team */
                .team-section {
                    padding: 96px 24px;
                    background: #1A1A1A;
                    color: #F0F4F7;
                    border-radius: 48px 48px 0 0;
                }

                .team-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .team-header {
                    display: flex;
                    flex-direction: column;
                    gap: 24px;
                    margin-bottom: 64px;
                }

                .team-eyebrow {
                    display: block;
                    font-size: 13px;
                    letter-spacing: 2px;
                    text-transform: uppercase;
                    font-weight: 700;
                    color: #FACC15;
                    margin-bottom: 8px;
                }

                .team-header h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(36px, 5vw, 48px);
                    font-weight: 500;
                    margin: 0;
                }

                .team-blurb {
                    color: #9CA3AF;
                    max-width: 384px;
                    margin: 0;
                }

                .team-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 32px;
                }

                .team-card {
                    cursor: pointer;
                    transition: transform 0.3s;
                }

                .team-card:hover { transform: translateY(-10px); }

                .team-photo-frame {
                    position: relative;
                    border-radius: 16px;
                    overflow: hidden;
                    margin-bottom: 24px;
                }

                .team-photo-frame img {
                    width: 100%;
                    height: 400px;
                    object-fit: cover;
                    display: block;
                    filter: grayscale(1);
                    transition: filter 0.5s;
                }

                .team-card:hover .team-photo-frame img { filter: none; }

                .team-arrow {
                    position: absolute;
                    bottom: 16px;
                    right: 16px;
                    padding: 8px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    display: flex;
                    opacity: 0;
                    transition: opacity 0.3s;
                }

                .team-card:hover .team-arrow { opacity: 1; }

                .team-card h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 24px;
                    font-weight: 500;
                    margin: 0 0 4px;
                }

                .team-card p {
                    color: #6B7280;
                    font-size: 14px;
                    margin: 0;
                }

                /* FAQ */
                .faq-section {
                    padding: 96px 24px;
                    max-width: 768px;
                    margin: 0 auto;
                }

                .section-heading {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(32px, 5vw, 40px);
                    font-weight: 500;
                    text-align: center;
                    margin: 0 0 48px;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                }

                .faq-item { border-bottom: 1px solid rgba(26, 26, 26, 0.1); }

                .faq-item:last-child { border-bottom: none; }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 16px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 24px 0;
                    font-family: 'Playfair Display', serif;
                    font-size: 20px;
                    font-weight: 500;
                    text-align: left;
                    color: #1A1A1A;
                    transition: color 0.2s;
                }

                .faq-question:hover { color: #9333EA; }

                .toggle-icon {
                    display: flex;
                    flex-shrink: 0;
                    transition: transform 0.3s;
                }

                .faq-item.open .toggle-icon { transform: rotate(180deg); }

                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease, opacity 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    opacity: 1;
                }

                .faq-answer p {
                    margin: 0;
                    padding: 0 0 24px;
                    line-height: 1.7;
                    opacity: 0.6;
                }

                /* Footer */
                .site-footer {
                    background: #121212;
                    color: #fff;
                    padding: 96px 24px 48px;
                    border-radius: 48px 48px 0 0;
                }

                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto 80px;
                    display: flex;
                    flex-direction: column;
                    gap: 48px;
                }

                .footer-pitch h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(44px, 7vw, 60px);
                    font-weight: 500;
                    margin: 0 0 16px;
                }

                .footer-pitch > p {
                    color: #9CA3AF;
                    max-width: 448px;
                    margin: 0 0 32px;
                }

                .contact-lines {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    color: #D1D5DB;
                }

                .footer-form-panel {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 24px;
                    padding: 32px;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .form-row {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .contact-form input,
                .contact-form textarea {
                    background: none;
                    border: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    padding: 16px;
                    color: #fff;
                    font-size: 15px;
                    resize: vertical;
                    transition: border-color 0.2s;
                }

                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #fff;
                }

                .contact-form input::placeholder,
                .contact-form textarea::placeholder {
                    color: rgba(255, 255, 255, 0.4);
                }

                .contact-form button {
                    background: #fff;
                    color: #121212;
                    border: none;
                    border-radius: 12px;
                    padding: 16px;
                    font-size: 16px;
                    font-weight: 700;
                    cursor: pointer;
                    margin-top: 16px;
                    transition: background 0.2s;
                }

                .contact-form button:hover { background: #E9D5FF; }

                .footer-bottom {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding-top: 32px;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    font-size: 14px;
                    color: #6B7280;
                }

                .footer-bottom p { margin: 0; }

                .footer-legal {
                    display: flex;
                    gap: 24px;
                }

                .footer-legal a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .footer-legal a:hover { color: #fff; }

                /* Booking modal */
                .modal-layer {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 16px;
                }

                .modal-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    animation: fadeIn 0.2s ease-out;
                }

                .modal-dialog {
                    position: relative;
                    background: #fff;
                    border-radius: 24px;
                    padding: 32px;
                    width: 100%;
                    max-width: 512px;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    animation: modalIn 0.25s ease-out;
                }

                .modal-close {
                    position: absolute;
                    top: 16px;
                    right: 16px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 8px;
                    border-radius: 50%;
                    display: flex;
                    color: #1A1A1A;
                    transition: background 0.2s;
                }

                .modal-close:hover { background: #F3F4F6; }

                .modal-dialog h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 30px;
                    font-weight: 500;
                    margin: 0 0 8px;
                }

                .modal-lead {
                    opacity: 0.6;
                    line-height: 1.6;
                    margin: 0 0 24px;
                }

                .booking-form {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .booking-form input,
                .booking-form select {
                    width: 100%;
                    background: #F9FAFB;
                    border: 1px solid transparent;
                    border-radius: 12px;
                    padding: 16px;
                    font-size: 15px;
                    color: #1A1A1A;
                    transition: border-color 0.2s;
                }

                .booking-form input:focus,
                .booking-form select:focus {
                    outline: none;
                    border-color: #1A1A1A;
                }

                .booking-form select { opacity: 0.6; }

                .booking-submit {
                    background: #1A1A1A;
                    color: #fff;
                    border: none;
                    border-radius: 12px;
                    padding: 16px;
                    font-size: 16px;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.2s;
                }

                .booking-submit:hover { background: #9333EA; }

                /* Scroll reveal */
                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                @keyframes spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }

                @keyframes float {
                    0%, 100% { transform: translateY(-15px); }
                    50% { transform: translateY(15px); }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes modalIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes menuIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: none; }
                }

                @keyframes heroEnter {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: none; }
                }

                @media (min-width: 769px) {
                    .nav-links {
                        display: flex;
                        gap: 40px;
                    }
                    .nav-actions {
                        display: flex;
                        align-items: center;
                        gap: 16px;
                    }
                    .burger-menu { display: none; }
                    .mobile-menu { display: none; }

                    .about-grid {
                        flex-direction: row;
                        align-items: center;
                    }
                    .about-media { flex: 1; }
                    .about-copy { flex: 1; }
                    .about-quote { display: block; }

                    .services-grid { grid-template-columns: repeat(3, 1fr); }

                    .team-header {
                        flex-direction: row;
                        justify-content: space-between;
                        align-items: flex-end;
                    }
                    .team-blurb { text-align: right; }
                    .team-grid { grid-template-columns: repeat(3, 1fr); }

                    .footer-grid { flex-direction: row; }
                    .footer-pitch { flex: 5; }
                    .footer-form-panel { flex: 7; }
                    .form-row { flex-direction: row; }
                    .form-row input { flex: 1; }
                    .footer-bottom {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-section { padding-top: 140px; }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 2fr 1fr;
                        align-items: center;
                        gap: 16px;
                    }
                    .hero-left { align-self: center; }
                    .hero-right {
                        align-items: flex-end;
                        text-align: right;
                        align-self: end;
                        padding-bottom: 40px;
                    }

                    .journey-grid { flex-direction: row; }
                    .journey-pitch {
                        flex: 1;
                        position: sticky;
                        top: 128px;
                        align-self: flex-start;
                    }
                    .journey-steps { flex: 1; }
                }
                "#}
            </style>
        </div>
    }
}
