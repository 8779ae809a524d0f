// SlideCollection
//
// index state of one slider.  the index is always in [0, count); every move
// goes through go_to(), which wraps negative and overlong indices alike
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideCollection {
    count: usize,
    current: usize,
}

impl SlideCollection {
    // a slider without slides is not a slider
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(SlideCollection { count, current: 0 })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn go_to(&mut self, index: isize) -> usize {
        self.current = wrap_index(index, self.count);
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current as isize - 1)
    }

    pub fn swipe(&mut self, action: SwipeAction) -> usize {
        match action {
            SwipeAction::Next => self.next(),
            SwipeAction::Prev => self.prev(),
        }
    }
}

// ((i mod n) + n) mod n, for n > 0
pub fn wrap_index(index: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    index.rem_euclid(count as isize) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeAction {
    Next,
    Prev,
}

impl SwipeAction {
    // finger moving left shows the next slide; short drags are taps
    pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Option<Self> {
        if end_x < start_x - threshold {
            Some(SwipeAction::Next)
        } else if end_x > start_x + threshold {
            Some(SwipeAction::Prev)
        } else {
            None
        }
    }
}
