//! View Renderer
//!
//! Pure projection of the filtered sequence into view models. Components
//! render these as-is; nothing here touches the DOM or mutates state.

use crate::controller::base_offset;
use crate::domain::Idea;

const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
const NOT_SPECIFIED: &str = "Not specified";

/// One idea card, shared by the carousel and the grid
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub index: usize,
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub category_label: String,
    pub description: String,
    pub features: Vec<String>,
    pub rating_label: String,
    pub complexity_label: &'static str,
    pub created_label: String,
    pub color: String,
    pub icon: Option<String>,
    pub demo_url: Option<String>,
    pub active: bool,
}

impl CardView {
    fn project(idea: &Idea, index: usize, current: usize) -> Self {
        Self {
            index,
            id: idea.id,
            title: idea.title.clone(),
            subtitle: idea.subtitle.clone(),
            category_label: idea.category.to_uppercase(),
            description: idea.description.clone(),
            features: idea.features.clone(),
            rating_label: idea.rating.to_string(),
            complexity_label: idea.complexity_label(),
            created_label: idea.created_label(),
            color: idea.color.clone(),
            icon: idea.icon.clone(),
            demo_url: idea.demo_url.clone(),
            active: index == current,
        }
    }

    pub fn header_style(&self) -> String {
        format!("background: {}", self.color)
    }
}

/// Track transform plus whether it should transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFrame {
    pub offset_px: f64,
    /// False while a drag is moving the track directly
    pub animated: bool,
    pub animation_ms: u64,
}

impl TrackFrame {
    pub fn style(&self) -> String {
        let transition = if self.animated {
            format!("transform {}ms {}", self.animation_ms, EASING)
        } else {
            "none".to_string()
        };
        format!("transform: translateX({}px); transition: {};", self.offset_px, transition)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    pub cards: Vec<CardView>,
    pub track: TrackFrame,
    pub progress_pct: f64,
}

impl CarouselFrame {
    pub fn progress_style(&self) -> String {
        format!("width: {}%", self.progress_pct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorView {
    pub index: usize,
    pub active: bool,
}

/// Full detail of one idea for the modal
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub category_label: String,
    pub rating_label: String,
    pub complexity_label: &'static str,
    pub created_label: String,
    pub description: String,
    pub problem: String,
    pub solution: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub color: String,
    pub demo_url: Option<String>,
    pub pending: bool,
    /// Prev/next buttons only make sense with more than one idea
    pub show_navigation: bool,
}

/// `(index + 1) / len * 100`, 0 for an empty sequence
pub fn progress_percent(index: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    (index + 1) as f64 / len as f64 * 100.0
}

pub fn carousel_frame(
    ideas: &[Idea],
    index: usize,
    item_width: f64,
    drag_offset: Option<f64>,
    animation_ms: u64,
) -> CarouselFrame {
    let base = base_offset(index, item_width);
    CarouselFrame {
        cards: cards(ideas, index),
        track: TrackFrame {
            offset_px: base + drag_offset.unwrap_or(0.0),
            animated: drag_offset.is_none(),
            animation_ms,
        },
        progress_pct: progress_percent(index, ideas.len()),
    }
}

pub fn grid_cards(ideas: &[Idea], index: usize) -> Vec<CardView> {
    cards(ideas, index)
}

pub fn indicators(len: usize, index: usize) -> Vec<IndicatorView> {
    (0..len)
        .map(|i| IndicatorView { index: i, active: i == index })
        .collect()
}

pub fn detail_view(ideas: &[Idea], index: usize) -> Option<DetailView> {
    let idea = ideas.get(index)?;
    Some(DetailView {
        id: idea.id,
        title: idea.title.clone(),
        subtitle: idea.subtitle.clone(),
        category_label: idea.category.to_uppercase(),
        rating_label: format!("{}/5", idea.rating),
        complexity_label: idea.complexity_label(),
        created_label: idea.created_label(),
        description: idea.description.clone(),
        problem: or_placeholder(idea.problem.as_deref()),
        solution: or_placeholder(idea.solution.as_deref()),
        features: idea.features.clone(),
        tags: idea.tags.clone(),
        color: idea.color.clone(),
        demo_url: idea.demo_url.clone(),
        pending: idea.is_pending(),
        show_navigation: ideas.len() > 1,
    })
}

fn cards(ideas: &[Idea], index: usize) -> Vec<CardView> {
    ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| CardView::project(idea, i, index))
        .collect()
}

fn or_placeholder(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}
