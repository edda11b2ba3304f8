use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use crate::carousel::cards::{CardTrack, TrackKind, AUTO_SCROLL_STEP};
use crate::carousel::timer::{wall_clock, Clocked};
use crate::carousel::viewport::{self, ReadingDirection};
use crate::components::listener::ListenerGuard;
use crate::components::observer::VisibilityObserver;

const SECTION_THRESHOLD: f64 = 0.3;
/// Tracks scroll right to left, matching the page.
const DIRECTION: ReadingDirection = ReadingDirection::Rtl;

pub enum CardMsg {
    Step(isize),
    JumpTo(usize),
    Hover(bool),
    InView(bool),
    Resize(f64),
    Unload,
    Wake,
}

#[derive(Properties, PartialEq)]
pub struct CardCarouselProps {
    pub kind: TrackKind,
}

pub struct CardCarousel {
    track: CardTrack,
    card_width: f64,
    section: NodeRef,
    track_ref: NodeRef,
    wake: Option<Timeout>,
    section_observer: Option<VisibilityObserver>,
    _listeners: Vec<ListenerGuard>,
}

fn viewport_width() -> f64 {
    viewport::current_width().unwrap_or(viewport::FALLBACK_WIDTH)
}

impl CardCarousel {
    fn schedule_wake(&mut self, ctx: &Context<Self>) {
        self.wake = self.track.next_deadline().map(|due| {
            let delay = due.saturating_sub(wall_clock()).min(u32::MAX as u64) as u32;
            let link = ctx.link().clone();
            Timeout::new(delay, move || link.send_message(CardMsg::Wake))
        });
    }

    /// Width of the first rendered card, read back from the DOM.
    fn measure_card_width(&self) -> Option<f64> {
        self.track_ref
            .cast::<Element>()
            .and_then(|track| track.first_element_child())
            .and_then(|card| card.dyn_into::<HtmlElement>().ok())
            .map(|card| card.offset_width() as f64)
    }

    /// Returns true when the measured width differs from the cached one.
    fn remeasure(&mut self) -> bool {
        match self.measure_card_width() {
            Some(width) if width != self.card_width => {
                self.card_width = width;
                true
            }
            _ => false,
        }
    }
}

impl Component for CardCarousel {
    type Message = CardMsg;
    type Properties = CardCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let kind = ctx.props().kind;
        let mut track = CardTrack::new(kind, kind.cards().len(), viewport_width());
        track.start(wall_clock());

        let mut listeners = Vec::new();
        if let Some(window) = window() {
            let link = ctx.link().clone();
            listeners.extend(ListenerGuard::new(&window, "resize", move |_| {
                link.send_message(CardMsg::Resize(viewport_width()));
            }));
            let link = ctx.link().clone();
            listeners.extend(ListenerGuard::new(&window, "beforeunload", move |_| {
                link.send_message(CardMsg::Unload);
            }));
        }

        Self {
            track,
            card_width: 0.0,
            section: NodeRef::default(),
            track_ref: NodeRef::default(),
            wake: None,
            section_observer: None,
            _listeners: listeners,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let now = wall_clock();
        let redraw = match msg {
            CardMsg::Step(direction) => {
                self.track.step(direction, now);
                true
            }
            CardMsg::JumpTo(index) => {
                self.track.jump_to(index, now);
                true
            }
            CardMsg::Hover(hovered) => {
                self.track.set_hovered(hovered, now);
                false
            }
            CardMsg::InView(in_view) => {
                self.track.set_in_view(in_view, now);
                false
            }
            CardMsg::Resize(width) => {
                let visible_changed = self.track.resize(width);
                self.remeasure() || visible_changed
            }
            CardMsg::Unload => {
                info!("{} carousel: tearing down", self.track.kind().name());
                self.track.teardown();
                false
            }
            CardMsg::Wake => self.track.advance_to(now) > 0,
        };
        self.schedule_wake(ctx);
        redraw
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let kind = ctx.props().kind;
        let cards = kind.cards();
        let active = self.track.active_indicator();

        // Originals first, then their copies for the wrap-around.
        let rendered = cards
            .iter()
            .chain(cards.iter())
            .enumerate()
            .map(|(slot, card)| {
                html! {
                    <div key={slot} class="carousel-card" aria-hidden={(slot >= cards.len()).to_string()}>
                        <div class="card-icon">{card.icon}</div>
                        <h3>{card.title}</h3>
                        <p>{card.body}</p>
                    </div>
                }
            });

        let indicators = (0..cards.len()).map(|index| {
            let onclick = ctx.link().callback(move |_| CardMsg::JumpTo(index));
            html! {
                <div
                    key={index}
                    class={classes!("carousel-indicator", (index == active).then_some("active"))}
                    {onclick}
                />
            }
        });

        let onmouseenter = ctx.link().callback(|_| CardMsg::Hover(true));
        let onmouseleave = ctx.link().callback(|_| CardMsg::Hover(false));
        let next = ctx.link().callback(|_| CardMsg::Step(AUTO_SCROLL_STEP));
        let prev = ctx.link().callback(|_| CardMsg::Step(-AUTO_SCROLL_STEP));

        html! {
            <section
                class="carousel-section"
                id={kind.name()}
                ref={self.section.clone()}
                {onmouseenter}
                {onmouseleave}
            >
                <h2 class="section-title">{kind.heading()}</h2>
                <div class="carousel-wrapper">
                    <button class="carousel-btn prev" aria-label="السابق" onclick={prev}>{DIRECTION.prev_arrow()}</button>
                    <div class="carousel-viewport">
                        <div
                            class="carousel-track"
                            id={kind.track_id()}
                            ref={self.track_ref.clone()}
                            style={self.track.track_style(self.card_width)}
                        >
                            { for rendered }
                        </div>
                    </div>
                    <button class="carousel-btn next" aria-label="التالي" onclick={next}>{DIRECTION.next_arrow()}</button>
                </div>
                <div class="carousel-indicators" id={kind.indicators_id()}>
                    { for indicators }
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        info!(
            "{} carousel: {} cards, {} visible",
            self.track.kind().name(),
            self.track.total_cards(),
            self.track.visible_cards()
        );
        // Card width is only known once the track is in the DOM.
        ctx.link().send_message(CardMsg::Resize(viewport_width()));
        if let Some(section) = self.section.cast::<Element>() {
            let name = self.track.kind().name();
            let link = ctx.link().clone();
            self.section_observer = VisibilityObserver::watch(&section, SECTION_THRESHOLD, None, move |visible| {
                link.send_message(CardMsg::InView(visible));
            })
            .map_err(|e| log::warn!("{} observer unavailable: {:?}", name, e))
            .ok();
        }
        self.schedule_wake(ctx);
    }
}
