//! Link cards for the homepage grid.
//!
//! DESIGN
//! ======
//! The grid is fixed literal data; rendering it is pure and produces the same
//! markup every time.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

/// One entry of the card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub blurb: Option<&'static str>,
}

pub const HOME_CARDS: [LinkCard; 4] = [
    LinkCard { icon: "👤", title: "关于我", href: "/about", blurb: Some("认识一下这个主页的主人") },
    LinkCard { icon: "📝", title: "我的博客", href: "/blog", blurb: Some("最新随笔") },
    LinkCard { icon: "💬", title: "留言板", href: "/guestbook", blurb: None },
    LinkCard { icon: "🎨", title: "作品展示", href: "/portfolio", blurb: None },
];

#[component]
pub fn Card(card: LinkCard) -> impl IntoView {
    view! {
        <article class="card">
            <div class="card__icon">{card.icon}</div>
            <h3 class="card__title">{card.title}</h3>
            {card.blurb.map(|blurb| view! { <p class="card__blurb">{blurb}</p> })}
            <a class="card__link" href=card.href>"查看详情"</a>
        </article>
    }
}

#[component]
pub fn CardGrid() -> impl IntoView {
    view! {
        <section class="card-grid">
            {HOME_CARDS.iter().map(|card| view! { <Card card=*card/> }).collect_view()}
        </section>
    }
}
