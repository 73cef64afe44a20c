use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// One schedulable activity and its roster, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in sign-up order, as reported by the server.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Remaining capacity. Saturates at zero when the roster is over capacity;
    /// the server owns enforcement.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    fn from_wire(name: String, body: ActivityBody) -> Self {
        Self {
            name,
            description: body.description,
            schedule: body.schedule,
            max_participants: body.max_participants,
            participants: body.participants,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ActivityBody {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

#[derive(Serialize)]
struct ActivityBodyRef<'a> {
    description: &'a str,
    schedule: &'a str,
    max_participants: u32,
    participants: &'a [String],
}

/// The `GET /activities` payload: a JSON object from activity name to
/// details. Key order is the server's order and is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCollection(Vec<Activity>);

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|activity| activity.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|activity| activity.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.iter_mut().find(|activity| activity.name == name)
    }

    /// Inserts or replaces by name. A replaced entry keeps its position.
    pub fn insert(&mut self, activity: Activity) {
        match self.get_mut(&activity.name) {
            Some(existing) => *existing = activity,
            None => self.0.push(activity),
        }
    }
}

impl FromIterator<Activity> for ActivityCollection {
    fn from_iter<T: IntoIterator<Item = Activity>>(iter: T) -> Self {
        let mut collection = Self::new();
        for activity in iter {
            collection.insert(activity);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a ActivityCollection {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ActivityCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(
                &activity.name,
                &ActivityBodyRef {
                    description: &activity.description,
                    schedule: &activity.schedule,
                    max_participants: activity.max_participants,
                    participants: &activity.participants,
                },
            )?;
        }
        map.end()
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = ActivityCollection;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping activity names to activity details")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut collection = ActivityCollection(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((name, body)) = access.next_entry::<String, ActivityBody>()? {
            // Repeated keys keep the first position and the last value.
            collection.insert(Activity::from_wire(name, body));
        }
        Ok(collection)
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
