//! Packrat memoization and the seed-growing left-recursion resolver.
//!
//! The cache is keyed by `(position, rule)` and stores the rule's outcome,
//! failures included, plus the position the cursor ended at. The payload is
//! type-erased: each rule has exactly one result type, so the downcast at the
//! rule boundary is an engine invariant, not a runtime question.

use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

use super::core::Parser;

/// Identity of a memoized rule. Cache key only; the discriminant is never
/// exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub(super) enum RuleId {
    StarExpressions,
    NamedExpression,
    Disjunction,
    Conjunction,
    Inversion,
    Comparison,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    ShiftExpr,
    Sum,
    Term,
    Factor,
    Power,
    Primary,
    Atom,
    StarTargets,
    Block,
}

pub(super) struct MemoEntry {
    /// `None` caches a failure.
    pub result: Option<Rc<dyn Any>>,
    /// Cursor position after the rule, meaningful only for successes.
    pub end: usize,
}

pub(super) type MemoCache = HashMap<(usize, RuleId), MemoEntry>;

impl Parser<'_> {
    /// Runs `body` through the cache. On a hit the cursor jumps to the cached
    /// end position and the cached outcome is returned without re-running the
    /// rule; failures replay as failures.
    pub(super) fn memoize<T>(
        &mut self,
        rule: RuleId,
        body: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T>
    where
        T: Clone + 'static,
    {
        if !self.ok() {
            return None;
        }
        let start = self.mark();
        if let Some(entry) = self.cache.get(&(start, rule)) {
            let end = entry.end;
            let result = entry.result.clone();
            self.reset(end);
            return result.map(|rc| downcast::<T>(&rc));
        }

        if !self.enter_recursion() {
            return None;
        }
        let result = body(self);
        self.exit_recursion();

        // An outcome reached after an error was raised is not a grammar
        // answer; caching it would leak first-pass state into the retry.
        if !self.ok() {
            return None;
        }
        // A failed rule leaves the cursor where it started, and replays of
        // the cached failure land there too.
        if result.is_none() {
            self.reset(start);
        }
        self.cache.insert(
            (start, rule),
            MemoEntry {
                result: result.clone().map(erase),
                end: self.mark(),
            },
        );
        result
    }

    /// Memoization for a left-recursive rule, by seed growing: plant a cached
    /// failure so the recursive call bottoms out, then re-run the body against
    /// ever-longer cached seeds until an iteration fails or stops advancing,
    /// and commit the best parse.
    pub(super) fn memoize_left_rec<T>(
        &mut self,
        rule: RuleId,
        body: impl Fn(&mut Self) -> Option<T>,
    ) -> Option<T>
    where
        T: Clone + 'static,
    {
        if !self.ok() {
            return None;
        }
        let start = self.mark();
        if let Some(entry) = self.cache.get(&(start, rule)) {
            let end = entry.end;
            let result = entry.result.clone();
            self.reset(end);
            return result.map(|rc| downcast::<T>(&rc));
        }

        if !self.enter_recursion() {
            return None;
        }

        self.cache.insert(
            (start, rule),
            MemoEntry {
                result: None,
                end: start,
            },
        );
        let mut best: Option<T> = None;
        let mut best_end = start;
        loop {
            self.reset(start);
            let raw = body(self);
            if !self.ok() {
                self.exit_recursion();
                self.cache.remove(&(start, rule));
                return None;
            }
            // A failed or non-advancing iteration means the previous seed was
            // already the longest parse.
            if raw.is_none() || self.mark() <= best_end {
                break;
            }
            best_end = self.mark();
            best = raw;
            self.cache.insert(
                (start, rule),
                MemoEntry {
                    result: best.clone().map(erase),
                    end: best_end,
                },
            );
        }
        self.reset(best_end);
        self.exit_recursion();
        best
    }
}

fn erase<T: 'static>(value: T) -> Rc<dyn Any> {
    Rc::new(value)
}

fn downcast<T: Clone + 'static>(rc: &Rc<dyn Any>) -> T {
    rc.downcast_ref::<T>()
        .expect("memo payload type is fixed per rule")
        .clone()
}
