//=========================================================================
// Item Layout
//=========================================================================
//
// Collision-free random placement for the guess phase.
//
// Rejection sampling: each item's top-left corner is drawn uniformly
// from the configured region until its margin-grown rectangle misses
// every already placed (margin-grown) rectangle. Attempts per item are
// capped; on exhaustion the whole layout restarts, and after the
// relayout cap the scene fails with `GameError::Layout`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::catalog::{Item, ItemId};
use crate::core::config::PlacementConfig;
use crate::core::error::{GameError, Result};
use crate::core::geometry::{Point, Rect};
use crate::core::render::ImageHandle;

//=== Placement ===========================================================

/// Where one item sits on screen for the lifetime of a game scene.
#[derive(Debug, Clone)]
pub struct Placement {
    pub id: ItemId,
    pub image: ImageHandle,
    pub rect: Rect,
}

//=== place_items =========================================================

pub fn place_items<R: Rng + ?Sized>(
    items: &[Item],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Vec<Placement>> {
    for round in 0..=config.max_relayouts {
        if let Some(placements) = try_layout(items, config, rng) {
            return Ok(placements);
        }
        warn!(
            target: "scene",
            "Layout attempt {} could not fit {} items, retrying",
            round + 1,
            items.len()
        );
    }

    Err(GameError::Layout {
        items: items.len(),
        attempts: config.total_attempts(),
    })
}

//--- Internal Helpers ----------------------------------------------------

fn try_layout<R: Rng + ?Sized>(
    items: &[Item],
    config: &PlacementConfig,
    rng: &mut R,
) -> Option<Vec<Placement>> {
    let mut placed: Vec<Placement> = Vec::with_capacity(items.len());

    for item in items {
        let rect = (0..config.max_attempts).find_map(|_| {
            let origin = Point::new(
                rng.random_range(config.x_range.0..=config.x_range.1),
                rng.random_range(config.y_range.0..=config.y_range.1),
            );
            let candidate = Rect::at(origin, item.image.size());
            let grown = candidate.inflate(config.margin);
            let free = placed
                .iter()
                .all(|p| !grown.intersects(&p.rect.inflate(config.margin)));
            free.then_some(candidate)
        })?;

        placed.push(Placement {
            id: item.id,
            image: item.image.clone(),
            rect,
        });
    }

    Some(placed)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::core::render::{Color, Image};

    fn items(count: usize, side: u32) -> Vec<Item> {
        (0..count)
            .map(|index| Item {
                id: ItemId { level: 1, index },
                image: Arc::new(Image::filled(side, side, Color::RED, 255)),
            })
            .collect()
    }

    #[test]
    fn placements_never_overlap_with_margin() {
        let config = PlacementConfig::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placed = place_items(&items(6, 120), &config, &mut rng).unwrap();

            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    assert!(
                        !a.rect.inflate(config.margin).intersects(&b.rect.inflate(config.margin)),
                        "seed {}: {:?} overlaps {:?}",
                        seed,
                        a.rect,
                        b.rect
                    );
                }
            }
        }
    }

    #[test]
    fn origins_stay_inside_region() {
        let config = PlacementConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let placed = place_items(&items(5, 80), &config, &mut rng).unwrap();

        for p in &placed {
            assert!((200..=840).contains(&p.rect.x));
            assert!((100..=600).contains(&p.rect.y));
        }
    }

    #[test]
    fn placement_preserves_item_order_and_size() {
        let config = PlacementConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let placed = place_items(&items(3, 90), &config, &mut rng).unwrap();

        let ids: Vec<_> = placed.iter().map(|p| p.id.index).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(placed.iter().all(|p| p.rect.width == 90 && p.rect.height == 90));
    }

    #[test]
    fn single_item_is_always_accepted() {
        let config = PlacementConfig {
            x_range: (0, 0),
            y_range: (0, 0),
            max_attempts: 1,
            max_relayouts: 0,
            ..PlacementConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let placed = place_items(&items(1, 2000), &config, &mut rng).unwrap();
        assert_eq!(placed[0].rect.origin(), Point::new(0, 0));
    }

    #[test]
    fn impossible_layout_fails_instead_of_hanging() {
        let config = PlacementConfig {
            max_attempts: 20,
            max_relayouts: 2,
            ..PlacementConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let err = place_items(&items(2, 700), &config, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::Layout { items: 2, attempts: 60 }), "got {:?}", err);
    }
}
