use std::fmt::Debug;

use tracing::debug;

use crate::prelude::*;

/// A transition system whose state colors are computed by applying a function to the state
/// colors of an underlying transition system. Transitions are left untouched.
#[derive(Clone)]
pub struct MapStateColor<Ts, F> {
    ts: Ts,
    f: F,
}

impl<Ts, F> MapStateColor<Ts, F> {
    /// Creates a new instance that relabels the colors of `ts` through `f`.
    pub fn new(ts: Ts, f: F) -> Self {
        Self { ts, f }
    }

    /// Returns a reference to the underlying transition system.
    pub fn ts(&self) -> &Ts {
        &self.ts
    }
}

impl<Ts: Debug, F> Debug for MapStateColor<Ts, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MapStateColor({:?})", self.ts)
    }
}

impl<D, Ts, F> TransitionSystem for MapStateColor<Ts, F>
where
    D: Color,
    Ts: TransitionSystem,
    F: Fn(Ts::StateColor) -> D,
{
    type Alphabet = Ts::Alphabet;
    type StateIndex = Ts::StateIndex;
    type StateColor = D;

    fn alphabet(&self) -> &Self::Alphabet {
        self.ts.alphabet()
    }

    fn successor_index(
        &self,
        state: Self::StateIndex,
        symbol: SymbolOf<Self>,
    ) -> Option<Self::StateIndex> {
        self.ts.successor_index(state, symbol)
    }

    fn state_color(&self, state: Self::StateIndex) -> Option<Self::StateColor> {
        self.ts.state_color(state).map(&self.f)
    }
}

impl<D, Ts, F> Pointed for MapStateColor<Ts, F>
where
    D: Color,
    Ts: Pointed,
    F: Fn(Ts::StateColor) -> D,
{
    fn initial(&self) -> Self::StateIndex {
        self.ts.initial()
    }
}

/// A state in a [`MatchingProduct`], consisting of one state of the left and one state of the
/// right transition system.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProductIndex<L, R>(pub L, pub R);

impl<L: Show, R: Show> Show for ProductIndex<L, R> {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

/// The synchronized product of two transition systems. Its states are pairs
/// [`ProductIndex`]`(p, q)`, and there is a transition from `(p, q)` on a symbol iff `p` and `q`
/// both have a transition on that symbol, in which case it leads to the pair of the successors.
/// If either side has no move, neither does the product. The color of a pair is the pair of
/// colors.
///
/// Transitions are only computed when they are asked for, so exploring the product from its
/// initial state never touches pairs that are not reachable. The alphabet of the product
/// consists of the symbols both sides have in common, ordered as in the left alphabet.
///
/// # Example
/// ```
/// use dfa_decide::prelude::*;
///
/// let left = DFABuilder::default()
///     .with_state_colors([true, false])
///     .with_edges([(0, 'a', 1), (1, 'a', 0), (1, 'b', 1)])
///     .into_dfa(0)
///     .unwrap();
/// let right = DFABuilder::default()
///     .with_state_colors([true])
///     .with_edges([(0, 'a', 0), (0, 'b', 0)])
///     .into_dfa(0)
///     .unwrap();
///
/// let product = (&left).ts_product(&right);
/// assert_eq!(product.initial(), ProductIndex(0, 0));
/// assert_eq!(product.reached_state_index("ab"), Some(ProductIndex(1, 0)));
/// assert_eq!(product.reached_state_index("b"), None);
/// assert_eq!(product.state_color(ProductIndex(1, 0)), Some((false, true)));
/// ```
#[derive(Clone, Debug)]
pub struct MatchingProduct<L: TransitionSystem, R> {
    left: L,
    right: R,
    alphabet: L::Alphabet,
}

impl<L, R> MatchingProduct<L, R>
where
    L: TransitionSystem,
    R: TransitionSystem<Alphabet = L::Alphabet>,
{
    /// Creates the product of `left` and `right`.
    pub fn new(left: L, right: R) -> Self {
        let alphabet = left.alphabet().intersection(right.alphabet());
        debug!(
            "building product over {} common symbols (left has {}, right has {})",
            alphabet.size(),
            left.alphabet().size(),
            right.alphabet().size()
        );
        Self {
            left,
            right,
            alphabet,
        }
    }

    /// Returns a reference to the left component.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right component.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> TransitionSystem for MatchingProduct<L, R>
where
    L: TransitionSystem,
    R: TransitionSystem<Alphabet = L::Alphabet>,
{
    type Alphabet = L::Alphabet;
    type StateIndex = ProductIndex<L::StateIndex, R::StateIndex>;
    type StateColor = (L::StateColor, R::StateColor);

    fn alphabet(&self) -> &Self::Alphabet {
        &self.alphabet
    }

    fn successor_index(
        &self,
        state: Self::StateIndex,
        symbol: SymbolOf<Self>,
    ) -> Option<Self::StateIndex> {
        if !self.alphabet.contains(symbol) {
            return None;
        }
        let ProductIndex(l, r) = state;
        let l = self.left.successor_index(l, symbol)?;
        let r = self.right.successor_index(r, symbol)?;
        Some(ProductIndex(l, r))
    }

    fn state_color(&self, state: Self::StateIndex) -> Option<Self::StateColor> {
        let ProductIndex(l, r) = state;
        Some((self.left.state_color(l)?, self.right.state_color(r)?))
    }
}

impl<L, R> Pointed for MatchingProduct<L, R>
where
    L: Pointed,
    R: Pointed<Alphabet = L::Alphabet>,
{
    fn initial(&self) -> Self::StateIndex {
        ProductIndex(self.left.initial(), self.right.initial())
    }
}
