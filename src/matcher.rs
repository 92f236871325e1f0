use crate::group::Group;
use crate::pattern::FileCandidate;

/// Accumulated state of a single scan over file names.
///
/// Each [`push`](MatchState::push) consumes the state and returns the next
/// one, so a scan is a plain fold:
///
/// ```rust
/// use lss::matcher::MatchState;
///
/// let groups = ["img1.png", "img2.png", "img5.png"]
///     .into_iter()
///     .fold(MatchState::default(), MatchState::push)
///     .finish();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].to_string(), "3 img%d.png 1-2 5 ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    groups: Vec<Group>,
    pending: Vec<FileCandidate>,
}

impl MatchState {
    /// Fold one file name into the state.
    ///
    /// Names without digits become literal groups immediately. Otherwise the
    /// name joins the first existing group whose pattern it can take, else
    /// forms a new group with the first pending file it shares a pattern with,
    /// else waits in `pending`.
    pub fn push(mut self, name: impl AsRef<str>) -> Self {
        let file = FileCandidate::from_name(name.as_ref());

        tracing::trace!(file = %file, "candidates");

        if !file.has_candidates() {
            tracing::debug!(file = %file.original_name, "no digits, literal group");
            self.groups.push(Group::literal(file.original_name));
            return self;
        }

        if self.join_group(&file) {
            return self;
        }

        if self.pair_pending(&file) {
            return self;
        }

        tracing::debug!(file = %file.original_name, "deferred");
        self.pending.push(file);
        self
    }

    fn join_group(&mut self, file: &FileCandidate) -> bool {
        for group in &mut self.groups {
            if let Some(value) = file.value_for(group.pattern()) {
                tracing::debug!(
                    file = %file.original_name,
                    pattern = group.pattern(),
                    value = %value,
                    "joined group"
                );
                group.add(value.clone());
                return true;
            }
        }
        false
    }

    fn pair_pending(&mut self, file: &FileCandidate) -> bool {
        let hit = self.pending.iter().enumerate().find_map(|(i, earlier)| {
            earlier
                .shared_pattern(file)
                .map(|(pattern, first, second)| {
                    (i, Group::pair(pattern, first.clone(), second.clone()))
                })
        });

        let Some((index, group)) = hit else {
            return false;
        };

        let earlier = self.pending.remove(index);
        tracing::debug!(
            first = %earlier.original_name,
            second = %file.original_name,
            pattern = group.pattern(),
            "new group"
        );
        self.groups.push(group);
        true
    }

    /// Groups formed so far, in creation order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Files still waiting for a partner, in arrival order.
    pub fn pending(&self) -> &[FileCandidate] {
        &self.pending
    }

    /// End the scan: every file still pending becomes a literal group.
    pub fn finish(self) -> Vec<Group> {
        let mut groups = self.groups;
        groups.extend(
            self.pending
                .into_iter()
                .map(|file| Group::literal(file.original_name)),
        );
        groups
    }
}

/// Group an ordered sequence of file names.
pub fn group_names<I>(names: I) -> Vec<Group>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .fold(MatchState::default(), MatchState::push)
        .finish()
}
