use contracts::domain::menu::{CategoryFilter, MenuItem, OverridePolicy};
use contracts::enums::meal_period::MealPeriodId;
use leptos::prelude::*;

use super::view_model::MenuViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{CardAnimated, SafeImage};
use crate::shared::icons::icon;

/// Time-aware menu: period tabs, category chips and the dish grid
#[component]
pub fn MenuSection() -> impl IntoView {
    let vm = MenuViewModel::new(OverridePolicy::default());
    vm.start_clock();

    view! {
        <section id="menu" class="menu-section">
            <Show when=move || vm.is_ready() fallback=MenuSkeleton>
                <div class="section-heading">
                    <span class="menu-section__clock">
                        {icon("clock")}
                        {move || vm.clock_label()}
                    </span>
                    <h2>"Our Menu"</h2>
                    <div class="section-heading__rule"></div>
                </div>

                <PeriodTabs vm=vm />
                <CategoryChips vm=vm />

                {move || {
                    let items = vm.visible_items();
                    if items.is_empty() {
                        view! { <EmptyCategory vm=vm /> }.into_any()
                    } else {
                        let active = vm.active_period();
                        view! {
                            <div class="menu-grid">
                                {items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| view! {
                                        <DishCard item=item active=active delay_ms={index as u32 * 80} />
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}

                <OrderSummary />
            </Show>
        </section>
    }
}

#[component]
fn MenuSkeleton() -> impl IntoView {
    view! {
        <div class="menu-skeleton" aria-busy="true">
            <div class="menu-skeleton__line menu-skeleton__line--short"></div>
            <div class="menu-skeleton__line menu-skeleton__line--title"></div>
            <div class="menu-skeleton__line menu-skeleton__line--rule"></div>
        </div>
    }
}

#[component]
fn PeriodTabs(vm: MenuViewModel) -> impl IntoView {
    view! {
        <div class="period-tabs" role="tablist">
            {vm
                .periods()
                .iter()
                .map(|period| {
                    let id = period.id;
                    let (start, end) = period.display_bounds();
                    view! {
                        <button
                            role="tab"
                            class=move || {
                                if vm.active_period() == id { "period-tab period-tab--active" } else { "period-tab" }
                            }
                            aria-selected=move || (vm.active_period() == id).to_string()
                            on:click=move |_| vm.select_period(id)
                        >
                            <span class="period-tab__name">{period.display_name}</span>
                            <span class="period-tab__time">{format!("{} - {}", start, end)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryChips(vm: MenuViewModel) -> impl IntoView {
    view! {
        <div class="category-chips">
            {move || {
                vm.categories()
                    .into_iter()
                    .map(|category| {
                        let label = category.label().to_string();
                        let chip = category.clone();
                        view! {
                            <button
                                class=move || {
                                    if vm.is_category_active(&chip) { "chip chip--active" } else { "chip" }
                                }
                                on:click=move |_| vm.select_category(category.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn DishCard(item: &'static MenuItem, active: MealPeriodId, delay_ms: u32) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="dish-card__image">
                <SafeImage src=item.image alt=item.name />
            </div>
            <div class="dish-card__body">
                <div class="dish-card__title">
                    <h3>{item.name}</h3>
                    <span class="dish-card__price">{item.price_display()}</span>
                </div>
                <p class="dish-card__description">{item.description}</p>
                <div class="dish-card__periods">
                    {item
                        .available_periods
                        .iter()
                        .map(|period| {
                            let variant = if *period == active { "accent" } else { "neutral" };
                            view! { <Badge variant=variant>{period.label()}</Badge> }
                        })
                        .collect_view()}
                </div>
                <Button
                    class="dish-card__add"
                    on_click=Callback::new(move |_| ctx.add_to_cart(item.id))
                >
                    "+ Add to Order"
                </Button>
            </div>
        </CardAnimated>
    }
}

#[component]
fn EmptyCategory(vm: MenuViewModel) -> impl IntoView {
    view! {
        <div class="menu-empty">
            <p>"No items available in this category for the selected time."</p>
            <Button
                variant="ghost"
                on_click=Callback::new(move |_| vm.select_category(CategoryFilter::All))
            >
                "View all items"
            </Button>
        </div>
    }
}

#[component]
fn OrderSummary() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="order-summary">
            <Button variant="outline" class="order-summary__button">
                {icon("cart")}
                "View Cart & Checkout"
                {move || ctx.cart_badge().map(|label| view! { <Badge variant="accent">{label}</Badge> })}
            </Button>
            <p class="order-summary__note">"Menu items availability may vary by time of day."</p>
        </div>
    }
}
