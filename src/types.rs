use smallvec::SmallVec;

pub type ParamOffset = (usize, usize);
pub type CapturedParam = (String, ParamOffset);
pub type CaptureList = SmallVec<[CapturedParam; 4]>;

/// Parameters bound from one successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    named: CaptureList,
    values: Vec<Option<String>>,
    path: String,
}

impl RouteParams {
    pub(crate) fn new(path: &str, named: CaptureList, values: Vec<Option<String>>) -> Self {
        Self {
            named,
            values,
            path: path.to_string(),
        }
    }

    /// Value of the named parameter, if its group participated in the match.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, (start, len))| &self.path[*start..*start + *len])
    }

    /// `(start, len)` byte span of the named parameter in the matched path.
    pub fn offset(&self, name: &str) -> Option<ParamOffset> {
        self.named
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, offset)| *offset)
    }

    /// Values of every capture group, named or not, in opening-parenthesis
    /// order. Groups that did not participate hold `None`; trailing ones are
    /// dropped.
    pub fn positional(&self) -> &[Option<String>] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(name, (start, len))| {
            (name.as_str(), &self.path[*start..*start + *len])
        })
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}
