use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cursor_trail::CursorTrail;
use crate::quiz::modal::QuizModal;
use crate::Route;

fn pain_card(title: &str, sections: &[(&str, &[&str])], emphasis: Option<&str>) -> Html {
    html! {
        <div class="lp-pain-card">
            <h3>{title}</h3>
            { for sections.iter().map(|(label, points)| html! {
                <div class="lp-pain-section">
                    if !label.is_empty() {
                        <p class="lp-label">{*label}</p>
                    }
                    <ul>
                        { for points.iter().map(|p| html! { <li>{*p}</li> }) }
                    </ul>
                </div>
            })}
            if let Some(text) = emphasis {
                <p class="lp-emphasis">{text}</p>
            }
        </div>
    }
}

fn solution_step(number: &str, title: &str, transformation: &str, phases: &[(&str, &[&str])]) -> Html {
    html! {
        <div class="lp-solution-step">
            <div class="lp-step-number">{number}</div>
            <div class="lp-step-body">
                <h3>{title}</h3>
                <p class="lp-transformation">{transformation}</p>
                <div class="lp-phases">
                    { for phases.iter().map(|(label, items)| html! {
                        <div>
                            <p class="lp-label">{*label}</p>
                            <ul>
                                { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

fn comparison_row(bad: &str, good: &str) -> Html {
    html! {
        <tr>
            <td><span class="lp-x">{"✕"}</span>{bad}</td>
            <td class="lp-good"><span class="lp-tick">{"✓"}</span>{good}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    q: AttrValue,
    a: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let expanded = use_state(|| false);
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <div class="lp-faq-item">
            <button class="lp-faq-question" onclick={toggle}>
                <span>{props.q.clone()}</span>
                <span class="lp-faq-toggle">{ if *expanded { "−" } else { "+" } }</span>
            </button>
            if *expanded {
                <div class="lp-faq-answer">{props.a.clone()}</div>
            }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let quiz_open = use_state(|| false);

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

    let open_quiz = {
        let quiz_open = quiz_open.clone();
        Callback::from(move |_: MouseEvent| quiz_open.set(true))
    };
    let close_quiz = {
        let quiz_open = quiz_open.clone();
        Callback::from(move |_| quiz_open.set(false))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        color: #fff;
                        overflow-x: hidden;
                        position: relative;
                    }
                    .landing-page::before {
                        content: '';
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0.03;
                        background-image: radial-gradient(#ffffff 1px, transparent 1px);
                        background-size: 32px 32px;
                    }
                    .landing-page section { padding: 96px 24px; margin: 0 auto; }
                    .lp-hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        max-width: 1100px;
                    }
                    .lp-hero h1 {
                        font-size: clamp(2.25rem, 5vw, 4rem);
                        line-height: 1.15;
                        margin-bottom: 32px;
                    }
                    .lp-accent { color: #F2C94C; }
                    .lp-hero-sub {
                        color: #D2D2D2;
                        font-size: 1.3rem;
                        max-width: 720px;
                        line-height: 1.6;
                        margin-bottom: 40px;
                    }
                    .lp-cta-group {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 16px;
                    }
                    .lp-cta {
                        background: #F2C94C;
                        color: #0E0E0E;
                        font-size: 1.1rem;
                        font-weight: 700;
                        padding: 16px 48px;
                        border: none;
                        border-radius: 4px;
                        cursor: pointer;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .lp-cta:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 8px 24px rgba(242, 201, 76, 0.2);
                    }
                    .lp-cta-ghost {
                        background: #1A1A1A;
                        border: 1px solid #F2C94C;
                        color: #F2C94C;
                        font-weight: 600;
                        padding: 12px 32px;
                        border-radius: 4px;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .lp-cta-ghost:hover { background: #F2C94C; color: #0E0E0E; }
                    .lp-cta-outline {
                        background: none;
                        border: 1px solid #D2D2D2;
                        color: #D2D2D2;
                        padding: 12px 32px;
                        border-radius: 4px;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .lp-cta-outline:hover { border-color: #fff; color: #fff; }
                    .lp-section-title {
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        text-align: center;
                        margin-bottom: 64px;
                    }
                    .lp-pain { max-width: 1200px; }
                    .lp-pain-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 32px;
                        margin-bottom: 64px;
                    }
                    .lp-pain-card {
                        background: #1A1A1A;
                        border: 1px solid rgba(229, 229, 229, 0.1);
                        border-radius: 8px;
                        padding: 32px;
                        transition: transform 0.3s, border-color 0.3s;
                    }
                    .lp-pain-card:hover {
                        transform: translateY(-8px);
                        border-color: rgba(229, 229, 229, 0.25);
                    }
                    .lp-pain-card h3 { font-size: 1.25rem; margin: 0 0 24px; }
                    .lp-pain-card ul { list-style: none; padding: 0; margin: 0 0 16px; }
                    .lp-pain-card li { color: #D2D2D2; margin-bottom: 10px; padding-left: 16px; position: relative; }
                    .lp-pain-card li::before { content: '•'; color: #666; position: absolute; left: 0; }
                    .lp-label {
                        color: #F2C94C;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 8px;
                    }
                    .lp-emphasis { color: #EB5757; font-style: italic; margin-top: 16px; }
                    .lp-center { display: flex; justify-content: center; }
                    .lp-belief { max-width: 900px; }
                    .lp-belief-box {
                        background: #1A1A1A;
                        border: 2px solid #F2C94C;
                        border-radius: 8px;
                        padding: 64px 48px;
                        text-align: center;
                    }
                    .lp-belief-box h2 { font-size: 2rem; margin: 0 0 32px; }
                    .lp-belief-box ul { list-style: none; padding: 0; margin: 0; }
                    .lp-belief-box li { color: #D2D2D2; font-size: 1.15rem; margin-bottom: 16px; }
                    .lp-quality { max-width: 820px; text-align: center; }
                    .lp-quality h2 { font-size: clamp(1.9rem, 4vw, 3rem); margin-bottom: 24px; }
                    .lp-quality-sub { font-size: 1.4rem; color: #D2D2D2; margin-bottom: 48px; }
                    .lp-quality-sub b { color: #fff; }
                    .lp-quality ul {
                        list-style: none;
                        padding: 0;
                        display: inline-block;
                        text-align: left;
                        margin-bottom: 48px;
                    }
                    .lp-quality li {
                        color: #D2D2D2;
                        font-size: 1.2rem;
                        margin-bottom: 20px;
                        padding-left: 20px;
                        position: relative;
                    }
                    .lp-quality li::before { content: '•'; color: #EB5757; position: absolute; left: 0; }
                    .lp-quality-close { font-size: 1.4rem; font-weight: 700; line-height: 1.6; }
                    .lp-solution { max-width: 980px; }
                    .lp-solution-steps { display: flex; flex-direction: column; gap: 48px; }
                    .lp-solution-step { display: flex; gap: 32px; }
                    .lp-step-number {
                        flex-shrink: 0;
                        width: 80px;
                        height: 80px;
                        border-radius: 50%;
                        background: #F2C94C;
                        color: #0E0E0E;
                        font-size: 2.25rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .lp-step-body {
                        background: #1A1A1A;
                        border: 1px solid rgba(229, 229, 229, 0.1);
                        border-radius: 8px;
                        padding: 32px;
                        flex-grow: 1;
                    }
                    .lp-step-body h3 { font-size: 1.5rem; margin: 0 0 8px; }
                    .lp-transformation { color: #EB5757; font-style: italic; margin-bottom: 32px; }
                    .lp-phases {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 32px;
                    }
                    .lp-phases ul { list-style: none; padding: 0; margin: 0; }
                    .lp-phases li {
                        color: #D2D2D2;
                        font-size: 0.9rem;
                        margin-bottom: 8px;
                        padding-left: 16px;
                        position: relative;
                    }
                    .lp-phases li::before { content: '•'; color: #444; position: absolute; left: 0; }
                    .lp-comparison { max-width: 900px; }
                    .lp-comparison table {
                        width: 100%;
                        border-collapse: collapse;
                        border: 1px solid rgba(229, 229, 229, 0.15);
                    }
                    .lp-comparison th {
                        background: #1A1A1A;
                        padding: 24px;
                        text-align: left;
                        border-bottom: 1px solid rgba(229, 229, 229, 0.15);
                        width: 50%;
                    }
                    .lp-comparison td {
                        padding: 24px;
                        color: #D2D2D2;
                        vertical-align: top;
                        border-bottom: 1px solid rgba(229, 229, 229, 0.1);
                    }
                    .lp-comparison td.lp-good { background: rgba(26, 26, 26, 0.3); color: #fff; }
                    .lp-x { color: #EB5757; font-weight: 700; margin-right: 16px; }
                    .lp-tick { color: #27AE60; font-weight: 700; margin-right: 16px; }
                    .lp-final { text-align: center; max-width: 900px; padding: 128px 24px; }
                    .lp-final h2 { font-size: clamp(2.25rem, 5vw, 3.75rem); margin-bottom: 24px; }
                    .lp-final p { font-size: 1.25rem; color: #D2D2D2; margin-bottom: 48px; }
                    .lp-faq { max-width: 900px; }
                    .lp-faq h2 { font-size: 1.9rem; margin-bottom: 48px; }
                    .lp-faq-item { border-bottom: 1px solid #333; }
                    .lp-faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: none;
                        border: none;
                        color: inherit;
                        text-align: left;
                        font-size: 1.1rem;
                        font-weight: 600;
                        padding: 24px 0;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .lp-faq-question:hover { color: #F2C94C; }
                    .lp-faq-toggle { font-size: 1.5rem; flex-shrink: 0; margin-left: 16px; }
                    .lp-faq-answer {
                        color: #D2D2D2;
                        line-height: 1.7;
                        padding-bottom: 24px;
                        white-space: pre-wrap;
                    }
                    .lp-footer {
                        padding: 48px 24px;
                        text-align: center;
                        color: #666;
                        border-top: 1px solid #333;
                    }
                "#}
            </style>

            <CursorTrail />
            <QuizModal is_open={*quiz_open} on_close={close_quiz} />

            <section class="lp-hero">
                <h1>
                    {"We Build the "}
                    <span class="lp-accent">{"Complete Revenue System"}</span>
                    {" Your B2B SaaS Needs to Grow "}
                    <span class="lp-accent">{"Predictably"}</span>
                </h1>
                <p class="lp-hero-sub">
                    {"Built Specifically for Teams at $5K-$50K MRR Who Want Predictable Pipelines, Not Wasted Marketing Budgets"}
                </p>
                <div class="lp-cta-group">
                    <button class="lp-cta" onclick={open_quiz.clone()}>
                        {"Take the 2-Minute Diagnostic"}
                    </button>
                    <Link<Route> to={Route::Booking}>
                        <button class="lp-cta-ghost">{"Book a 30 Minute Discovery Call"}</button>
                    </Link<Route>>
                </div>
            </section>

            <section class="lp-pain">
                <h2 class="lp-section-title">{"Does this sound familiar?"}</h2>
                <div class="lp-pain-grid">
                    { pain_card(
                        "You wake up and immediately check Stripe, hoping someone signed up while you slept",
                        &[("", &[
                            "Another day checking if the business is still alive",
                            "You refresh your dashboard three times before breakfast",
                            "Most days there's nothing",
                            "You have no idea what next month looks like",
                            "The anxiety is eating you alive",
                        ])],
                        None,
                    )}
                    { pain_card(
                        "You've been stuck at roughly the same MRR for six months despite trying everything",
                        &[
                            ("You tried outbound:", &[
                                "Cold email got your domain blacklisted",
                                "LinkedIn automation got banned",
                                "Facebook ads: clicks but 0 conversions",
                            ]),
                            ("You tried agencies:", &[
                                "Spent $15K on an agency that sent pretty reports but brought no customers",
                            ]),
                        ],
                        Some("Nothing stuck. You're starting to wonder if this business is actually going to work."),
                    )}
                    { pain_card(
                        "Every customer came from someone you knew personally and you have no idea how to get the next ten",
                        &[
                            ("Your current customers:", &[
                                "People from your old company",
                                "Co-founder's network",
                                "That one guy from Twitter",
                            ]),
                            ("Your outbound results:", &[
                                "Sent 500 cold emails",
                                "Two people replied",
                                "Zero booked calls",
                            ]),
                        ],
                        Some("Your network is tapped out. Growth has stopped completely."),
                    )}
                    { pain_card(
                        "You're burning through cash on tools and experiments while your co-founder is getting nervous",
                        &[
                            ("Monthly burn on failed tactics:", &[
                                "Another $300 on cold email tool",
                                "Another $500 on ads",
                                "Software budget is $2K, getting nothing",
                            ]),
                            ("Internal tension:", &[
                                "Co-founder asks what the plan is",
                                "You don't have an answer",
                                "Meetings are getting tense",
                            ]),
                        ],
                        None,
                    )}
                </div>
                <div class="lp-center">
                    <Link<Route> to={Route::Booking}>
                        <button class="lp-cta-ghost">{"Book a Strategy Call"}</button>
                    </Link<Route>>
                </div>
            </section>

            <section class="lp-belief">
                <div class="lp-belief-box">
                    <h2>{"\"The tactics aren't broken. Your approach is.\""}</h2>
                    <ul>
                        <li>{"Cold email used to work three years ago but deliverability dropped 35% since then."}</li>
                        <li>{"You're buying disconnected tactics instead of building systems that connect."}</li>
                    </ul>
                </div>
            </section>

            <section class="lp-quality">
                <h2>{"The problem isn't that you're not getting leads."}</h2>
                <p class="lp-quality-sub">
                    {"The problem is the "}<b>{"kind of leads you're getting."}</b>
                </p>
                <ul>
                    <li>{"They book demos just to \"learn about the product.\""}</li>
                    <li>{"They ask, \"So… what does your tool actually do?\""}</li>
                    <li>{"They say, \"Let me think about it,\" and then disappear."}</li>
                </ul>
                <p class="lp-quality-close">
                    {"We rebuild your acquisition system so the right people show up pre-sold, your demos convert at 20%+"}
                </p>
            </section>

            <section class="lp-solution">
                <h2 class="lp-section-title">
                    {"Revenue Machine Builder: The Complete System for $5K–$50K MRR SaaS Teams"}
                </h2>
                <div class="lp-solution-steps">
                    { solution_step(
                        "1",
                        "We find exactly who will pay for your product",
                        "You get 50-100 qualified leads in your pipeline by day 60",
                        &[
                            ("Week 1-2: Deep customer research", &[
                                "Analyze sales calls",
                                "Interview customers",
                                "Define exact ICP",
                            ]),
                            ("Week 3-4: Build outreach that gets responses", &[
                                "Write sequences using customer language",
                                "Design LinkedIn campaigns",
                                "Warm up domains",
                            ]),
                        ],
                    )}
                    { solution_step(
                        "2",
                        "We build your complete conversion system",
                        "Your demo booking rate goes from 5% to 20-30%",
                        &[
                            ("Offer design & packaging", &[
                                "Structure $3K-$10K offer",
                                "Create pricing tiers",
                                "Design qualifying questions",
                            ]),
                            ("Landing pages & sequences", &[
                                "High converting LPs",
                                "21-day nurture sequences",
                                "Reminder sequences",
                            ]),
                        ],
                    )}
                    { solution_step(
                        "3",
                        "We set up tracking so you double down on what works",
                        "You know within 48 hours when something stops working",
                        &[
                            ("Full attribution setup", &[
                                "CRM tracking",
                                "GA4 conversion tracking",
                                "Campaign tagging",
                            ]),
                            ("Dashboard & reporting", &[
                                "Custom dashboards (CAC, LTV, Close rate)",
                                "Bottleneck analysis",
                            ]),
                        ],
                    )}
                </div>
                <div class="lp-center" style="margin-top: 64px;">
                    <button class="lp-cta-outline" onclick={open_quiz.clone()}>
                        {"See how we'd approach your situation →"}
                    </button>
                </div>
            </section>

            <section class="lp-comparison">
                <table>
                    <thead>
                        <tr>
                            <th>{"Random Tactics"}</th>
                            <th>{"Complete System"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { comparison_row(
                            "Try one channel for 30 days, switch if it doesn't work",
                            "Build 5 systems that work together and compound",
                        )}
                        { comparison_row(
                            "No idea which activity actually drives revenue",
                            "Complete attribution showing exactly what works",
                        )}
                        { comparison_row(
                            "Generic outreach that gets ignored or blacklisted",
                            "Custom messaging based on actual customer research",
                        )}
                    </tbody>
                </table>
            </section>

            <section class="lp-final">
                <h2>{"Stop hoping. Start building."}</h2>
                <p>
                    {"Most SaaS teams stay stuck at $5K-$50K for years. Break through by building the system that scales."}
                </p>
                <div class="lp-cta-group">
                    <Link<Route> to={Route::Booking}>
                        <button class="lp-cta">{"Book a 30 Minute Discovery Call"}</button>
                    </Link<Route>>
                </div>
            </section>

            <section class="lp-faq">
                <h2>{"FAQ"}</h2>
                <FaqItem
                    q="I've been burned by agencies before. How is this actually different?"
                    a="Most agencies sell you generic templates that worked for someone else's market. We start with deep customer research specific to YOUR market: we analyze your existing sales calls, interview your current customers, study your competitors and define your exact ICP. Everything we build — outreach messaging, landing pages, sales scripts, tracking — is custom to your customers. We build the machine. You own it. And we don't stop until it's producing qualified leads."
                />
                <FaqItem
                    q="This sounds expensive. I'm bootstrapped and can't afford another $15K gamble."
                    a="You've already spent $15K-$40K on tactics that didn't work: cold email tools that got you blacklisted, LinkedIn automation that got banned, agencies that sent pretty reports. This costs roughly the same, but instead of random tactics you get five complete systems that connect and compound. We work in 90-day sprints — you see first leads in your pipeline by day 60, not month 10."
                />
                <FaqItem
                    q="How long does this actually take? I need customers in the next 60-90 days."
                    a="First qualified leads in pipeline: day 60. System improvements visible: week 3. Full system operational: 90 days. Week 1-2 is customer research and ICP definition, week 3-4 builds and launches outreach, week 5-8 covers landing pages and conversion infrastructure, week 9-12 is tracking and optimization. We launch and iterate — you don't wait until everything is perfect."
                />
                <FaqItem
                    q="I'm a technical founder who doesn't know sales or marketing. Will I have to learn all this?"
                    a="No. That's exactly who this is built for. We handle customer research, all outreach sequences, landing pages, offers, tracking and sales scripts. You approve the strategy, show up for demos (we give you the script) and provide product expertise when needed. We're building your revenue machine so you can focus on product."
                />
                <FaqItem
                    q="What if I don't have product-market fit yet? Will this even work?"
                    a="If you have 5+ paying customers who came from anywhere, that's enough signal to work with. Those customers tell us why they bought, what pain they were solving and what language they use. We find more people exactly like them. If you have zero customers or only 1-2, you need customer development first — we're not the right fit yet."
                />
                <FaqItem
                    q="Do you guarantee specific results like '10 new customers in 90 days'?"
                    a="No, and anyone who does is either lying or about to deliver garbage leads to hit a number. What we do guarantee: 50-100 qualified leads in your pipeline by day 60, a complete tracking system showing exactly which activities drive revenue, full conversion infrastructure, and we stay involved until the system produces consistently. Whether those leads close depends on your product, pricing and sales execution."
                />
                <FaqItem
                    q="Do we own everything you build, or do you take it with you if we stop working together?"
                    a="You own 100% of everything: outreach sequences, landing pages, sales scripts, tracking dashboards, CRM workflows and complete SOPs. Nothing is locked behind proprietary tools we control. If you take it in-house after 90 days, your team has everything they need to continue."
                />
            </section>

            <footer class="lp-footer">
                <p>{"© 2024 Revenue Machine Builder. All rights reserved."}</p>
            </footer>
        </div>
    }
}
