//! Star Ratings
//!
//! Read-only `.stars[data-rating]` displays and the interactive
//! `#starRating` picker bound to the review form's rating input.

use std::rc::Rc;

use web_sys::{Document, Element, HtmlInputElement};

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Fill for each of `count` stars showing `rating`
pub fn star_fills(rating: f64, count: usize) -> Vec<StarFill> {
    (0..count)
        .map(|i| {
            let i = i as f64;
            if i < rating.floor() {
                StarFill::Full
            } else if i < rating {
                StarFill::Half
            } else {
                StarFill::Empty
            }
        })
        .collect()
}

/// Paint every read-only star block on the page
pub fn paint_static_ratings(doc: &Document) {
    for block in dom::query_all::<Element>(doc, ".stars") {
        let rating = block
            .get_attribute("data-rating")
            .and_then(|r| r.parse::<f64>().ok())
            .unwrap_or(0.0);
        let stars = dom::query_all_in::<Element>(&block, "i");
        for (star, fill) in stars.iter().zip(star_fills(rating, stars.len())) {
            dom::set_class(star, "active", fill == StarFill::Full);
            dom::set_class(star, "half-active", fill == StarFill::Half);
        }
    }
}

/// Interactive picker
pub struct StarPicker {
    stars: Vec<Element>,
    input: HtmlInputElement,
}

impl StarPicker {
    pub fn attach(doc: &Document) -> Option<Rc<Self>> {
        let root = doc.get_element_by_id("starRating")?;
        let input = dom::by_id::<HtmlInputElement>(doc, "ratingInput")
            .or_else(|| dom::query_doc(doc, r#"input[name="rating"]"#))?;
        let stars = dom::query_all_in::<Element>(&root, "i");
        let picker = Rc::new(Self { stars, input });

        picker.paint(picker.current());

        for (index, star) in picker.stars.iter().enumerate() {
            let rating = index as u8 + 1;
            let p = Rc::clone(&picker);
            dom_events::listen(star, "click", move |_| {
                p.input.set_value(&rating.to_string());
                p.paint(rating);
            });
            let p = Rc::clone(&picker);
            dom_events::listen(star, "mouseenter", move |_| p.paint(rating));
        }

        let p = Rc::clone(&picker);
        dom_events::listen(&root, "mouseleave", move |_| p.paint(p.current()));
        Some(picker)
    }

    /// Rating stored in the form, 0 when unset
    pub fn current(&self) -> u8 {
        self.input.value().parse().unwrap_or(0)
    }

    fn paint(&self, rating: u8) {
        for (i, star) in self.stars.iter().enumerate() {
            dom::set_class(star, "active", i < rating as usize);
        }
    }

    pub fn clear(&self) {
        self.input.set_value("");
        self.paint(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StarFill::*;

    #[test]
    fn test_star_fills_with_half() {
        assert_eq!(star_fills(3.5, 5), vec![Full, Full, Full, Half, Empty]);
    }

    #[test]
    fn test_star_fills_whole_and_zero() {
        assert_eq!(star_fills(4.0, 5), vec![Full, Full, Full, Full, Empty]);
        assert_eq!(star_fills(0.0, 3), vec![Empty, Empty, Empty]);
        assert_eq!(star_fills(0.2, 2), vec![Half, Empty]);
    }
}
