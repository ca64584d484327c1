use core::{iter, str::Chars};

use crate::generators::bitfield::Bitfield;
use crate::tables::{self, SENTINEL, SENTINEL_PAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessagePattern {
    Start,
    Data,
    None,
}

/// Iterates over the symbol patterns of an encoded message: the start
/// character, one pattern per payload character, then the stop character.
///
/// Payload characters without a pattern (and any literal `*`) are skipped, so
/// the message is always framed by exactly two sentinels.
#[derive(Debug, Clone)]
pub struct Message<'a> {
    payload: Chars<'a>,
    next_pat: MessagePattern,
}

impl<'a> Message<'a> {
    pub fn new(payload: &'a str) -> Self {
        Self {
            payload: payload.chars(),
            next_pat: MessagePattern::Start,
        }
    }

    fn next_data(&mut self) -> Option<Bitfield> {
        self.payload
            .by_ref()
            .filter(|&c| c != SENTINEL)
            .find_map(tables::pattern)
    }
}

impl<'a> iter::Iterator for Message<'a> {
    type Item = Bitfield;

    fn next(&mut self) -> Option<Self::Item> {
        let (item, next) = match self.next_pat {
            MessagePattern::Start => (Some(SENTINEL_PAT), MessagePattern::Data),
            MessagePattern::Data => match self.next_data() {
                Some(pat) => (Some(pat), MessagePattern::Data),
                None => (Some(SENTINEL_PAT), MessagePattern::None),
            },
            MessagePattern::None => (None, MessagePattern::None),
        };

        self.next_pat = next;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.payload.size_hint();
        match self.next_pat {
            MessagePattern::Start => (2, upper.map(|n| n + 2)),
            MessagePattern::Data => (1, upper.map(|n| n + 1)),
            MessagePattern::None => (0, Some(0)),
        }
    }
}

impl<'a> iter::FusedIterator for Message<'a> {}
