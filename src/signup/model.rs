use gpui::SharedString;
use serde::{Serialize, Serializer};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::form::{FormModel, SelectOption};

/// Orthopedic specialities a doctor can register under.
///
/// The serialized value is the lowercase variant name without separators,
/// e.g. `HandAndWrist` is `handandwrist`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Speciality {
    Shoulder,
    Elbow,
    HandAndWrist,
    HipAndThigh,
    FootAndAnkle,
    KneeAndLowerLeg,
    SpineSurgeon,
    PediatricOrthopedics,
    OrthopedicOncologist,
    ComplexTraumaSurgeon,
    PelvicAndAcetabularSurgeon,
    Other,
}

impl Speciality {
    pub fn value(self) -> &'static str {
        self.into()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Shoulder => "Shoulder",
            Self::Elbow => "Elbow",
            Self::HandAndWrist => "Hand and Wrist",
            Self::HipAndThigh => "Hip and Thigh",
            Self::FootAndAnkle => "Foot and Ankle",
            Self::KneeAndLowerLeg => "Knee and Lower Leg",
            Self::SpineSurgeon => "Spine Surgeon",
            Self::PediatricOrthopedics => "Pediatric Orthopedics",
            Self::OrthopedicOncologist => "Orthopedic Oncologist",
            Self::ComplexTraumaSurgeon => "Complex Trauma Surgeon",
            Self::PelvicAndAcetabularSurgeon => "Pelvic and Acetabular surgeon",
            Self::Other => "Other",
        }
    }

    pub fn values() -> impl Iterator<Item = &'static str> {
        Self::iter().map(Self::value)
    }

    pub fn options() -> impl Iterator<Item = SelectOption> {
        Self::iter().map(|speciality| SelectOption::new(speciality.value(), speciality.label()))
    }
}

/// Values of the doctor registration form.
#[derive(Clone, Debug, Default, Eq, PartialEq, FormModel)]
pub struct SignupValues {
    pub first_name: SharedString,
    pub last_name: SharedString,
    pub email: SharedString,
    pub url: SharedString,
    pub speciality: SharedString,
    pub accepted_terms: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupPayload<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    accepted_terms: bool,
    speciality: &'a str,
    url: &'a str,
}

impl Serialize for SignupValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SignupPayload {
            first_name: &self.first_name,
            last_name: &self.last_name,
            email: &self.email,
            accepted_terms: self.accepted_terms,
            speciality: &self.speciality,
            url: &self.url,
        }
        .serialize(serializer)
    }
}
