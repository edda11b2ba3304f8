use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{window, Element};
use yew::prelude::*;

use crate::carousel::reviews::{PageNav, ReviewCarousel};
use crate::carousel::timer::{wall_clock, Clocked};
use crate::carousel::viewport::{self, ReadingDirection};
use crate::components::lazy_image::LazyImage;
use crate::components::listener::ListenerGuard;
use crate::components::observer::VisibilityObserver;
use crate::content::REVIEWS;
use crate::media::lazy_image::review_src;

/// Share of the section that must be on screen for auto-play.
const SECTION_THRESHOLD: f64 = 0.3;

pub enum ReviewMsg {
    Navigate(PageNav),
    Hover(bool),
    InView(bool),
    PageHidden(bool),
    Resize(f64),
    Wake,
}

#[derive(Properties, PartialEq)]
pub struct ReviewCarouselProps {
    #[prop_or(ReadingDirection::Rtl)]
    pub direction: ReadingDirection,
}

pub struct ReviewCarouselView {
    carousel: ReviewCarousel,
    section: NodeRef,
    wake: Option<Timeout>,
    section_observer: Option<VisibilityObserver>,
    _listeners: Vec<ListenerGuard>,
}

fn viewport_width() -> f64 {
    viewport::current_width().unwrap_or(viewport::FALLBACK_WIDTH)
}

fn document_hidden() -> bool {
    window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

impl ReviewCarouselView {
    fn schedule_wake(&mut self, ctx: &Context<Self>) {
        self.wake = self.carousel.next_deadline().map(|due| {
            let delay = due.saturating_sub(wall_clock()).min(u32::MAX as u64) as u32;
            let link = ctx.link().clone();
            Timeout::new(delay, move || link.send_message(ReviewMsg::Wake))
        });
    }

    fn hover_callbacks(ctx: &Context<Self>) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
        (
            ctx.link().callback(|_| ReviewMsg::Hover(true)),
            ctx.link().callback(|_| ReviewMsg::Hover(false)),
        )
    }

    fn view_pagination(&self, ctx: &Context<Self>) -> Html {
        let active = self.carousel.shown_page();
        html! {
            <div class="carousel-pagination" id="carousel-pagination">
                { for (0..self.carousel.total_pages()).map(|page| {
                    let onclick = ctx.link().callback(move |_| ReviewMsg::Navigate(PageNav::Go(page)));
                    html! {
                        <button
                            key={page}
                            class={classes!("pagination-dot", (page == active).then_some("active"))}
                            aria-label={format!("الصفحة {}", page + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        }
    }
}

impl Component for ReviewCarouselView {
    type Message = ReviewMsg;
    type Properties = ReviewCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut carousel = ReviewCarousel::new(REVIEWS.len(), viewport_width());
        carousel.set_page_hidden(document_hidden(), wall_clock());

        let mut listeners = Vec::new();
        if let Some(window) = window() {
            let link = ctx.link().clone();
            listeners.extend(ListenerGuard::new(&window, "resize", move |_| {
                link.send_message(ReviewMsg::Resize(viewport_width()));
            }));
            if let Some(document) = window.document() {
                let link = ctx.link().clone();
                listeners.extend(ListenerGuard::new(&document, "visibilitychange", move |_| {
                    link.send_message(ReviewMsg::PageHidden(document_hidden()));
                }));
            }
        }

        Self {
            carousel,
            section: NodeRef::default(),
            wake: None,
            section_observer: None,
            _listeners: listeners,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let now = wall_clock();
        let redraw = match msg {
            ReviewMsg::Navigate(nav) => {
                debug!("review carousel: {:?}", nav);
                self.carousel.navigate(nav, now);
                true
            }
            ReviewMsg::Hover(hovered) => {
                self.carousel.set_hovered(hovered, now);
                false
            }
            ReviewMsg::InView(in_view) => {
                self.carousel.set_in_view(in_view, now);
                false
            }
            ReviewMsg::PageHidden(hidden) => {
                self.carousel.set_page_hidden(hidden, now);
                false
            }
            ReviewMsg::Resize(width) => self.carousel.resize(width, now),
            ReviewMsg::Wake => self.carousel.advance_to(now) > 0,
        };
        self.schedule_wake(ctx);
        redraw
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let direction = ctx.props().direction;
        let (onmouseenter, onmouseleave) = Self::hover_callbacks(ctx);
        let start = self.carousel.shown_range().start;

        let items = REVIEWS[self.carousel.shown_range()]
            .iter()
            .enumerate()
            .map(|(offset, review)| {
                let number = start + offset + 1;
                html! {
                    <article
                        key={number}
                        class="review-item"
                        style={format!("animation-delay: {:.1}s;", offset as f64 * 0.1)}
                        onmouseenter={onmouseenter.clone()}
                        onmouseleave={onmouseleave.clone()}
                    >
                        <div class="review-number">{format!("#{}", number)}</div>
                        <LazyImage
                            number={number}
                            src={review_src(review.file)}
                            alt={review.alt}
                        />
                    </article>
                }
            })
            .collect::<Html>();

        let prev = ctx.link().callback(|_| ReviewMsg::Navigate(PageNav::Prev));
        let next = ctx.link().callback(|_| ReviewMsg::Navigate(PageNav::Next));

        html! {
            <section class="reviews-section" id="reviews" ref={self.section.clone()} dir={direction.dir_attr()}>
                <h2 class="section-title">{"آراء طلابنا"}</h2>
                <div class="reviews-container">
                    <div class="carousel-nav prev"
                        onmouseenter={onmouseenter.clone()}
                        onmouseleave={onmouseleave.clone()}
                    >
                        <button aria-label="السابق" onclick={prev}>{direction.prev_arrow()}</button>
                    </div>
                    <div
                        class="reviews-grid"
                        id="reviews-grid"
                        style={format!("opacity: {}; transition: opacity 0.3s ease;", self.carousel.grid_opacity())}
                    >
                        { items }
                    </div>
                    <div class="carousel-nav next"
                        {onmouseenter}
                        {onmouseleave}
                    >
                        <button aria-label="التالي" onclick={next}>{direction.next_arrow()}</button>
                    </div>
                    { self.view_pagination(ctx) }
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        info!(
            "review carousel: {} reviews, {} per page",
            REVIEWS.len(),
            self.carousel.per_page()
        );
        if let Some(section) = self.section.cast::<Element>() {
            let link = ctx.link().clone();
            self.section_observer = VisibilityObserver::watch(&section, SECTION_THRESHOLD, None, move |visible| {
                link.send_message(ReviewMsg::InView(visible));
            })
            .map_err(|e| log::warn!("review section observer unavailable: {:?}", e))
            .ok();
        }
        self.schedule_wake(ctx);
    }
}
