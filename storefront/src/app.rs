//! Application components.

use bookstore_observability::StoreLogger;
use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;

use crate::config::StorefrontConfig;
use crate::state::{Msg, StoreState};
use crate::telemetry::{log_transition, session_logger};
use crate::view_model::{
    CartRowView, ProductCardView, StoreView, EMPTY_CART_MESSAGE, NO_RESULTS_MESSAGE,
};

const NAV_LINKS: [&str; 3] = ["Home", "About", "Contact"];

// ============================================================================
// Dispatch
// ============================================================================

/// Sends messages into the store state and logs the outcome.
#[derive(Clone, Copy)]
pub struct Dispatch {
    state: RwSignal<StoreState>,
    logger: StoredValue<StoreLogger>,
}

impl Dispatch {
    pub fn new(state: RwSignal<StoreState>, logger: StoreLogger) -> Self {
        Self {
            state,
            logger: StoredValue::new(logger),
        }
    }

    pub fn send(&self, msg: Msg) {
        if let Some(transition) = self.state.try_update(|state| state.dispatch(msg)) {
            self.logger
                .with_value(|logger| log_transition(logger, &transition));
        }
    }
}

fn use_store() -> (Dispatch, Memo<StoreView>) {
    (expect_context::<Dispatch>(), expect_context::<Memo<StoreView>>())
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (config, config_error) = match StorefrontConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (StorefrontConfig::default(), Some(err)),
    };

    let logger = session_logger(&config.logging);
    if let Some(err) = config_error {
        logger
            .warn_builder("invalid storefront config, using defaults")
            .field("error", format!("{err:#}"))
            .emit();
    }

    let state = RwSignal::new(StoreState::seeded());
    logger
        .info_builder("storefront started")
        .field_i64("products", state.with_untracked(|s| s.catalog().len()) as i64)
        .emit();

    let store_view = {
        let config = config.clone();
        Memo::new(move |_| state.with(|s| StoreView::derive(s, &config)))
    };

    provide_context(Dispatch::new(state, logger.child("store")));
    provide_context(store_view);
    provide_context(config.clone());

    view! {
        <Title text=config.store.name.clone()/>
        <Meta name="description" content=config.store.tagline.clone()/>

        <div class="storefront">
            <Header/>
            <main class="container">
                <CategoryChips/>
                <ProductGrid/>
            </main>
            <CartPanel/>
            <Footer/>
        </div>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let (dispatch, store_view) = use_store();
    let store_name = expect_context::<StorefrontConfig>().store.name;
    let menu_open = move || store_view.with(|v| v.mobile_menu_open);

    view! {
        <header class="site-header">
            <div class="header-bar">
                <button class="menu-toggle" on:click=move |_| dispatch.send(Msg::ToggleMobileMenu)>
                    {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <h1>{store_name}</h1>
                <nav class="desktop-nav">
                    <NavLinks/>
                </nav>
                <div class="header-actions">
                    <SearchBox/>
                    <button class="cart-button" on:click=move |_| dispatch.send(Msg::ToggleCart)>
                        "Cart"
                        <Show when=move || store_view.with(|v| v.show_badge)>
                            <span class="cart-badge">
                                {move || store_view.with(|v| v.item_count.to_string())}
                            </span>
                        </Show>
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <nav class="mobile-nav">
                    <NavLinks/>
                    <SearchBox/>
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    NAV_LINKS
        .into_iter()
        .map(|label| view! { <a href="#">{label}</a> })
        .collect_view()
}

#[component]
fn SearchBox() -> impl IntoView {
    let (dispatch, store_view) = use_store();

    view! {
        <input
            type="text"
            class="search"
            placeholder="Search products..."
            prop:value=move || store_view.with(|v| v.search_term.clone())
            on:input=move |ev| dispatch.send(Msg::SetSearchTerm(event_target_value(&ev)))
        />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let store = expect_context::<StorefrontConfig>().store;
    let year = chrono::Utc::now().year();
    let copyright = format!("\u{00a9} {} {}. All rights reserved.", year, store.name);

    let contact = store
        .address_lines
        .iter()
        .cloned()
        .chain(store.email.clone())
        .chain(store.phone.clone())
        .map(|line| view! { <span>{line}</span><br/> })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{store.name.clone()}</h3>
                    <p>{store.tagline.clone()}</p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {NAV_LINKS
                            .into_iter()
                            .chain(["Privacy Policy"])
                            .map(|label| view! { <li><a href="#">{label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Contact Us"</h3>
                    <address>{contact}</address>
                </div>
            </div>
            <p class="copyright">{copyright}</p>
        </footer>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn CategoryChips() -> impl IntoView {
    let (dispatch, store_view) = use_store();

    view! {
        <section class="categories">
            <h2>"Categories"</h2>
            <div class="chips">
                <For
                    each=move || store_view.with(|v| v.chips.clone())
                    key=|chip| (chip.label, chip.selected)
                    children=move |chip| {
                        let filter = chip.filter;
                        let class = if chip.selected { "chip chip-selected" } else { "chip" };
                        view! {
                            <button class=class on:click=move |_| dispatch.send(Msg::SelectCategory(filter))>
                                {chip.label}
                            </button>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn ProductGrid() -> impl IntoView {
    let (_, store_view) = use_store();

    view! {
        <div class="product-grid">
            <Show
                when=move || !store_view.with(|v| v.no_results)
                fallback=|| view! { <p class="no-results">{NO_RESULTS_MESSAGE}</p> }
            >
                <For
                    each=move || store_view.with(|v| v.products.clone())
                    key=|card| card.id
                    children=|card| view! { <ProductCard card=card/> }
                />
            </Show>
        </div>
    }
}

#[component]
fn ProductCard(card: ProductCardView) -> impl IntoView {
    let (dispatch, _) = use_store();
    let id = card.id;

    view! {
        <div class="product-card">
            <img src=card.image alt=card.name.clone() class="cover"/>
            <div class="product-info">
                <h3>{card.name}</h3>
                <p class="category">{card.category}</p>
                <p class="description">{card.description}</p>
                <div class="card-footer">
                    <span class="price">{card.price}</span>
                    <button class="btn" on:click=move |_| dispatch.send(Msg::AddToCart(id))>
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartPanel() -> impl IntoView {
    let (dispatch, store_view) = use_store();

    view! {
        <Show when=move || store_view.with(|v| v.cart_open)>
            <div class="cart-overlay">
                <aside class="cart-panel">
                    <div class="cart-header">
                        <h2>"Your Cart"</h2>
                        <button on:click=move |_| dispatch.send(Msg::CloseCart)>"\u{2715}"</button>
                    </div>
                    <Show
                        when=move || !store_view.with(|v| v.cart_empty)
                        fallback=move || view! {
                            <div class="cart-empty">
                                <p>{EMPTY_CART_MESSAGE}</p>
                                <button on:click=move |_| dispatch.send(Msg::CloseCart)>
                                    "Continue Shopping"
                                </button>
                            </div>
                        }
                    >
                        <For
                            each=move || store_view.with(|v| v.cart_rows.clone())
                            key=|row| (row.id, row.quantity)
                            children=|row| view! { <CartRow row=row/> }
                        />
                        <div class="cart-total">
                            <span>"Total:"</span>
                            <span>{move || store_view.with(|v| v.total.clone())}</span>
                        </div>
                        <button class="btn checkout" on:click=move |_| dispatch.send(Msg::Checkout)>
                            "Proceed to Checkout"
                        </button>
                    </Show>
                </aside>
            </div>
        </Show>
    }
}

#[component]
fn CartRow(row: CartRowView) -> impl IntoView {
    let (dispatch, _) = use_store();
    let id = row.id;

    view! {
        <div class="cart-row">
            <img src=row.image alt=row.name.clone() class="thumb"/>
            <div class="cart-row-info">
                <h3>{row.name}</h3>
                <p>{row.unit_price}</p>
                <div class="quantity">
                    <button on:click=move |_| dispatch.send(Msg::UpdateQuantity(id, -1))>"\u{2212}"</button>
                    <span>{row.quantity.to_string()}</span>
                    <button on:click=move |_| dispatch.send(Msg::UpdateQuantity(id, 1))>"+"</button>
                </div>
            </div>
            <p class="line-subtotal">{row.subtotal}</p>
        </div>
    }
}
