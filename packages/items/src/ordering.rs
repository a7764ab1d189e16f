// ABOUTME: Rank shift rules that keep item order dense
// ABOUTME: Pure functions deciding clamped ranks and the window each mutation shifts

//! Every live item carries a rank, and for `N` items the ranks are exactly
//! `0..N`. Inserting, moving or deleting one item therefore displaces a
//! contiguous window of other items by one position. The functions here
//! compute that window as a [`Shift`]; the item store applies it with a single
//! `UPDATE` in the same transaction as the row mutation.

/// A contiguous window of ranks to displace by `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    /// Lowest affected rank, inclusive
    pub lower: i64,
    /// Highest affected rank, inclusive; unbounded when `None`
    pub upper: Option<i64>,
    /// `+1` or `-1`
    pub delta: i64,
}

impl Shift {
    pub fn contains(&self, rank: i64) -> bool {
        rank >= self.lower && self.upper.map_or(true, |upper| rank <= upper)
    }

    /// The rank `rank` ends up at once this shift is applied.
    pub fn apply(&self, rank: i64) -> i64 {
        if self.contains(rank) {
            rank + self.delta
        } else {
            rank
        }
    }
}

/// Rank a new item receives when `count` items already exist.
///
/// Absent requests append. Requests beyond the end clamp to `count`, negative
/// requests clamp to `0`.
pub fn insert_rank(requested: Option<i64>, count: i64) -> i64 {
    requested.unwrap_or(count).clamp(0, count.max(0))
}

/// Shift that opens a slot at `rank` before inserting.
///
/// Appending at `count` displaces nothing.
pub fn insert_shift(rank: i64, count: i64) -> Option<Shift> {
    (rank < count).then_some(Shift {
        lower: rank,
        upper: None,
        delta: 1,
    })
}

/// Rank an existing item moves to when `count` items exist, itself included.
///
/// The last valid slot is `count - 1`; clamping to `count` would leave a gap.
pub fn move_rank(requested: i64, count: i64) -> i64 {
    requested.clamp(0, (count - 1).max(0))
}

/// Shift that makes room for an item moving from `old` to `new`.
///
/// Moving down the list pulls `(old, new]` up by one; moving up pushes
/// `[new, old)` down by one. The moving item itself is never in the window.
pub fn move_shift(old: i64, new: i64) -> Option<Shift> {
    use std::cmp::Ordering;

    match new.cmp(&old) {
        Ordering::Greater => Some(Shift {
            lower: old + 1,
            upper: Some(new),
            delta: -1,
        }),
        Ordering::Less => Some(Shift {
            lower: new,
            upper: Some(old - 1),
            delta: 1,
        }),
        Ordering::Equal => None,
    }
}

/// Shift that closes the gap left by deleting the item at `rank`.
///
/// Applied after the row is gone, so every remaining rank `>= rank` moves.
pub fn delete_shift(rank: i64) -> Shift {
    Shift {
        lower: rank,
        upper: None,
        delta: -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// In-memory list of `(name, rank)` driven by the same rules as the store
    #[derive(Default)]
    struct Ranked {
        items: Vec<(char, i64)>,
    }

    impl Ranked {
        fn with(names: &str) -> Self {
            let mut ranked = Self::default();
            for name in names.chars() {
                ranked.insert(name, None);
            }
            ranked
        }

        fn count(&self) -> i64 {
            self.items.len() as i64
        }

        fn rank_of(&self, name: char) -> i64 {
            self.items.iter().find(|(n, _)| *n == name).unwrap().1
        }

        fn shift(&mut self, shift: Shift) {
            for (_, rank) in self.items.iter_mut() {
                *rank = shift.apply(*rank);
            }
        }

        fn insert(&mut self, name: char, requested: Option<i64>) {
            let count = self.count();
            let rank = insert_rank(requested, count);
            if let Some(shift) = insert_shift(rank, count) {
                self.shift(shift);
            }
            self.items.push((name, rank));
        }

        fn relocate(&mut self, name: char, requested: i64) {
            let old = self.rank_of(name);
            let new = move_rank(requested, self.count());
            if let Some(shift) = move_shift(old, new) {
                self.shift(shift);
            }
            self.items.iter_mut().find(|(n, _)| *n == name).unwrap().1 = new;
        }

        fn remove(&mut self, name: char) {
            let rank = self.rank_of(name);
            self.items.retain(|(n, _)| *n != name);
            self.shift(delete_shift(rank));
        }

        /// Names sorted by rank
        fn listing(&self) -> String {
            let mut sorted = self.items.clone();
            sorted.sort_by_key(|(_, rank)| *rank);
            sorted.into_iter().map(|(name, _)| name).collect()
        }

        fn is_dense(&self) -> bool {
            let mut ranks: Vec<i64> = self.items.iter().map(|(_, rank)| *rank).collect();
            ranks.sort_unstable();
            ranks == (0..self.count()).collect::<Vec<_>>()
        }
    }

    #[rstest]
    #[case(None, 0, 0)]
    #[case(None, 4, 4)]
    #[case(Some(2), 4, 2)]
    #[case(Some(4), 4, 4)]
    #[case(Some(9), 4, 4)]
    #[case(Some(-3), 4, 0)]
    #[case(Some(5), 0, 0)]
    fn test_insert_rank_clamps(
        #[case] requested: Option<i64>,
        #[case] count: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(insert_rank(requested, count), expected);
    }

    #[rstest]
    #[case(3, 6, 3)]
    #[case(6, 6, 5)]
    #[case(100, 6, 5)]
    #[case(-1, 6, 0)]
    #[case(4, 1, 0)]
    fn test_move_rank_clamps_to_last_slot(
        #[case] requested: i64,
        #[case] count: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(move_rank(requested, count), expected);
    }

    #[test]
    fn test_append_needs_no_shift() {
        assert_eq!(insert_shift(3, 3), None);
        assert_eq!(
            insert_shift(1, 3),
            Some(Shift {
                lower: 1,
                upper: None,
                delta: 1
            })
        );
    }

    #[test]
    fn test_move_shift_windows() {
        assert_eq!(
            move_shift(2, 5),
            Some(Shift {
                lower: 3,
                upper: Some(5),
                delta: -1
            })
        );
        assert_eq!(
            move_shift(5, 2),
            Some(Shift {
                lower: 2,
                upper: Some(4),
                delta: 1
            })
        );
        assert_eq!(move_shift(4, 4), None);
    }

    #[test]
    fn test_shift_apply_respects_bounds() {
        let shift = Shift {
            lower: 2,
            upper: Some(4),
            delta: 1,
        };
        assert_eq!(shift.apply(1), 1);
        assert_eq!(shift.apply(2), 3);
        assert_eq!(shift.apply(4), 5);
        assert_eq!(shift.apply(5), 5);
    }

    #[test]
    fn test_insert_in_middle_pushes_later_items() {
        let mut list = Ranked::with("abcd");
        list.insert('x', Some(1));
        assert_eq!(list.listing(), "axbcd");
        assert!(list.is_dense());
    }

    #[test]
    fn test_move_down_pulls_window_up() {
        let mut list = Ranked::with("abcdefg");
        list.relocate('c', 5);
        assert_eq!(list.rank_of('c'), 5);
        assert_eq!(list.rank_of('d'), 2);
        assert_eq!(list.rank_of('e'), 3);
        assert_eq!(list.rank_of('f'), 4);
        assert_eq!(list.listing(), "abdefcg");
    }

    #[test]
    fn test_move_up_pushes_window_down() {
        let mut list = Ranked::with("abcdefg");
        list.relocate('f', 2);
        assert_eq!(list.rank_of('f'), 2);
        assert_eq!(list.rank_of('c'), 3);
        assert_eq!(list.rank_of('d'), 4);
        assert_eq!(list.rank_of('e'), 5);
        assert_eq!(list.listing(), "abfcdeg");
    }

    #[test]
    fn test_move_past_end_lands_last() {
        let mut list = Ranked::with("abc");
        list.relocate('a', 10);
        assert_eq!(list.listing(), "bca");
        assert!(list.is_dense());
    }

    #[test]
    fn test_delete_closes_gap() {
        let mut list = Ranked::with("abcde");
        list.remove('b');
        assert_eq!(list.listing(), "acde");
        assert_eq!(list.rank_of('c'), 1);
        assert!(list.is_dense());
    }

    #[test]
    fn test_insert_front_then_delete_scenario() {
        let mut list = Ranked::default();
        list.insert('a', None);
        list.insert('b', None);
        list.insert('c', Some(0));
        assert_eq!(list.listing(), "cab");

        list.remove('a');
        assert_eq!(list.rank_of('c'), 0);
        assert_eq!(list.rank_of('b'), 1);
    }

    #[test]
    fn test_mixed_sequence_stays_dense() {
        // Deterministic pseudo-random walk over inserts, moves and deletes
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        let mut list = Ranked::default();
        let names: Vec<char> = ('a'..='z').chain('A'..='Z').collect();
        let mut unused = names.iter().copied();

        for _ in 0..400 {
            let roll = next() % 10;
            let count = list.count();
            if count == 0 || roll < 4 {
                match unused.next() {
                    Some(name) => {
                        let requested = (next() % 3 != 0).then(|| (next() % 12) as i64 - 2);
                        list.insert(name, requested);
                    }
                    None if count == 0 => break,
                    None => {
                        let victim = list.items[(next() % count as u64) as usize].0;
                        list.remove(victim);
                    }
                }
            } else if roll < 8 {
                let name = list.items[(next() % count as u64) as usize].0;
                list.relocate(name, (next() % 12) as i64 - 2);
            } else {
                let name = list.items[(next() % count as u64) as usize].0;
                list.remove(name);
            }
            assert!(list.is_dense(), "ranks not dense: {:?}", list.items);
        }
    }
}
