//! Series data: the second argument of the plot call.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use cui_jsobject::{JsArray, JsDateTime, JsDateTimeFormat, JsDouble, JsInteger, JsValue};

/// A y value of a data point.
pub trait SeriaValue: Copy + std::fmt::Debug {
    fn to_js(self) -> Box<dyn JsValue>;
}

impl SeriaValue for f64 {
    fn to_js(self) -> Box<dyn JsValue> {
        Box::new(JsDouble::new(self))
    }
}

impl SeriaValue for i64 {
    fn to_js(self) -> Box<dyn JsValue> {
        Box::new(JsInteger::new(self))
    }
}

impl SeriaValue for i32 {
    fn to_js(self) -> Box<dyn JsValue> {
        Box::new(JsInteger::from(self))
    }
}

/// Something that can provide one series as an array.
pub trait ArrayContainer {
    fn to_js_array(&self) -> JsArray<Box<dyn JsValue>>;
}

/// Points in time with a value each, rendered `[["<date>",<value>],...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLineSeria<V> {
    format: JsDateTimeFormat,
    points: Vec<(NaiveDateTime, V)>,
}

impl<V: SeriaValue> TimeLineSeria<V> {
    pub fn new(format: JsDateTimeFormat) -> Self {
        Self {
            format,
            points: Vec::new(),
        }
    }

    pub fn add(&mut self, at: NaiveDateTime, value: V) -> &mut Self {
        self.points.push((at, value));
        self
    }

    pub fn add_date(&mut self, day: NaiveDate, value: V) -> &mut Self {
        self.add(day.and_time(NaiveTime::MIN), value)
    }

    /// Adds the point only when both parts are present.
    pub fn add_if_not_empty(&mut self, at: Option<NaiveDateTime>, value: Option<V>) -> &mut Self {
        if let (Some(at), Some(value)) = (at, value) {
            self.add(at, value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<V: SeriaValue> ArrayContainer for TimeLineSeria<V> {
    fn to_js_array(&self) -> JsArray<Box<dyn JsValue>> {
        self.points
            .iter()
            .map(|(at, value)| {
                let tuple = JsArray::<Box<dyn JsValue>>::new()
                    .with(Box::new(JsDateTime::from_naive(*at, self.format)))
                    .with(value.to_js());
                Box::new(tuple) as Box<dyn JsValue>
            })
            .collect()
    }
}

/// All series of a plot, rendered as an array of arrays.
#[derive(Debug, Default)]
pub struct SeriesData {
    nested: JsArray<JsArray<Box<dyn JsValue>>>,
}

impl SeriesData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the series unless it is empty.
    pub fn add_seria_data(&mut self, data: JsArray<Box<dyn JsValue>>) -> &mut Self {
        if !data.is_empty() {
            self.nested.push(data);
        }
        self
    }

    pub fn add_container(&mut self, container: &dyn ArrayContainer) -> &mut Self {
        self.add_seria_data(container.to_js_array())
    }

    /// Adds a plain series of y values.
    pub fn add_values<V: SeriaValue>(&mut self, values: impl IntoIterator<Item = V>) -> &mut Self {
        self.add_seria_data(values.into_iter().map(SeriaValue::to_js).collect())
    }

    pub fn len(&self) -> usize {
        self.nested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nested.is_empty()
    }

    pub fn to_notation(&self) -> String {
        // Arrays always render, empty ones as `[]`.
        self.nested.value_as_string().unwrap_or_else(|| "[]".to_string())
    }
}
