//! Minimax meeting-point selection over a completed travel matrix

use itertools::Itertools;
use serde::Serialize;

use crate::model::{NodeDirectory, Person, PersonDirectory, TravelMatrix};
use crate::{Error, Time};

/// One person's route to the chosen meeting point
#[derive(Debug, Clone, Serialize)]
pub struct PersonRoute {
    pub person: String,
    pub from: String,
    pub to: String,
    /// Aggregate travel time from home to the meeting point
    pub time: Time,
    /// Full path as node ids, starting at home
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_text: Option<String>,
    /// Travel time of each consecutive hop along `path`
    pub segment_times: Vec<Time>,
}

/// Chosen meeting point with per-person routes
#[derive(Debug, Clone, Serialize)]
pub struct MeetingPlan {
    pub meeting_point: String,
    pub meeting_point_name: String,
    /// Minimized worst-case travel time across the group
    pub meet_time: Time,
    pub routes: Vec<PersonRoute>,
}

/// Picks the candidate minimizing the worst-case travel time for the group
///
/// Candidates are the requested people's homes and points of interest in
/// request order, first occurrence winning. A candidate any person cannot
/// reach is excluded; ties on the minimized maximum keep the earlier
/// candidate.
///
/// # Errors
///
/// [`Error::InvalidPerson`] if a requested id is absent from the directory
/// (checked before any matrix access), [`Error::UnknownNode`] if a home or
/// point of interest is missing from the matrix, and
/// [`Error::NoFeasibleMeetingPoint`] if every candidate is unreachable for
/// someone.
pub fn optimal_meeting(
    matrix: &TravelMatrix,
    nodes: &NodeDirectory,
    people: &PersonDirectory,
    requested: &[String],
) -> Result<MeetingPlan, Error> {
    let mut group = Vec::with_capacity(requested.len());
    for id in requested {
        let person = people
            .get(id)
            .ok_or_else(|| Error::InvalidPerson(id.clone()))?;
        group.push((id.as_str(), person));
    }

    let mut homes = Vec::with_capacity(group.len());
    for (_, person) in &group {
        let home = matrix
            .index_of(&person.home)
            .ok_or_else(|| Error::UnknownNode(person.home.clone()))?;
        homes.push(home);
    }

    let candidates = candidate_ids(&group);

    let mut best: Option<(usize, Time)> = None;
    for id in &candidates {
        let candidate = matrix
            .index_of(id)
            .ok_or_else(|| Error::UnknownNode((*id).to_string()))?;
        let mut max_time: Time = 0.0;
        let mut feasible = true;
        for &home in &homes {
            let time = matrix.entry(home, candidate).time;
            if !time.is_finite() {
                feasible = false;
                break;
            }
            max_time = max_time.max(time);
        }
        if feasible && best.is_none_or(|(_, best_max)| max_time < best_max) {
            best = Some((candidate, max_time));
        }
    }

    let Some((meeting, meet_time)) = best else {
        return Err(Error::NoFeasibleMeetingPoint);
    };

    let meeting_point = matrix.node_id(meeting).to_string();
    // Display name of the point actually selected
    let meeting_point_name = nodes
        .get(&meeting_point)
        .map_or_else(|| meeting_point.clone(), |node| node.name.clone());

    let routes = group
        .iter()
        .zip(&homes)
        .map(|(&(id, person), &home)| person_route(matrix, id, person, home, meeting))
        .collect();

    Ok(MeetingPlan {
        meeting_point,
        meeting_point_name,
        meet_time,
        routes,
    })
}

/// Homes first, then points of interest in listed order; first occurrence
/// wins, which fixes the downstream tie-break
fn candidate_ids<'a>(group: &[(&'a str, &'a Person)]) -> Vec<&'a str> {
    group
        .iter()
        .flat_map(|(_, person)| {
            std::iter::once(person.home.as_str())
                .chain(person.points_of_interest.iter().map(String::as_str))
        })
        .unique()
        .collect()
}

fn person_route(
    matrix: &TravelMatrix,
    person_id: &str,
    person: &Person,
    home: usize,
    meeting: usize,
) -> PersonRoute {
    let entry = matrix.entry(home, meeting);
    let indices = entry.path.as_deref().unwrap_or_default();
    let path: Vec<String> = indices
        .iter()
        .map(|&i| matrix.node_id(i).to_string())
        .collect();
    // Per-hop times are looked up from the matrix, not split off the
    // aggregate
    let segment_times = indices
        .windows(2)
        .map(|pair| matrix.entry(pair[0], pair[1]).time)
        .collect();

    PersonRoute {
        person: person_id.to_string(),
        from: person.home.clone(),
        to: matrix.node_id(meeting).to_string(),
        time: entry.time,
        path,
        route_text: entry.text.clone(),
        segment_times,
    }
}
