//! Voting ⇄ `seev.001` meeting notification.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::documents::{
    DateFormat, MeetingNotice, MeetingNotification, NotificationDocument, SecurityIdentification,
    SecurityIdentifier, SecurityPosition, VoteParameters, NOTIFICATION_NAMESPACE,
};
use super::resolutions::{questions_to_resolutions, resolutions_to_questions};
use crate::domain::foundation::Timestamp;
use crate::domain::voting::{MeetingType, Voting};
use crate::ports::CodecError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DEADLINE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Builds the notification document for a voting.
///
/// The meeting type comes from the voting name prefix (`GMET_...`), the
/// announcement date from the begin timestamp and the deadline (seconds
/// precision, no zone) from the end timestamp.
///
/// # Errors
///
/// Returns `Marshal` when the voting name carries no known meeting type.
pub(super) fn encode_notification(voting: &Voting) -> Result<NotificationDocument, CodecError> {
    let meeting_type = MeetingType::from_voting_name(voting.name())
        .map_err(|err| CodecError::Marshal(err.to_string()))?;

    Ok(NotificationDocument {
        xmlns: NOTIFICATION_NAMESPACE.to_string(),
        meeting_notification: MeetingNotification {
            meeting: MeetingNotice {
                meeting_id: voting.id().to_string(),
                meeting_type: meeting_type.code().to_string(),
                announcement_date: voting.begin_timestamp().date().format(DATE_FORMAT).to_string(),
            },
            securities: vec![SecurityPosition {
                id: SecurityIdentification {
                    id: SecurityIdentifier {
                        isin: voting.security().to_string(),
                    },
                },
            }],
            resolutions: questions_to_resolutions(voting.questions()),
            vote: VoteParameters {
                vote_deadline: Some(DateFormat {
                    date: voting
                        .end_timestamp()
                        .as_datetime()
                        .format(DEADLINE_FORMAT)
                        .to_string(),
                }),
                vote_market_deadline: None,
            },
        },
    })
}

/// Rebuilds a voting from a notification document.
///
/// The voting is named `{Tp}_{MtgId}` and begins at UTC midnight of the
/// announcement date. The end comes from `VoteDdln`, or `VoteMktDdln` when
/// the former is absent, truncated to whole seconds.
///
/// # Errors
///
/// Returns `Malformed` (carrying `payload`) for an unknown meeting type,
/// unparseable dates, a missing deadline or security, or a voting that
/// fails its own validation.
pub(super) fn decode_notification(
    document: NotificationDocument,
    payload: &str,
) -> Result<Voting, CodecError> {
    let notification = document.meeting_notification;
    let meeting = notification.meeting;

    let meeting_type: MeetingType = meeting
        .meeting_type
        .parse()
        .map_err(|err| CodecError::malformed(payload, err))?;

    let announced = parse_date(&meeting.announcement_date)
        .ok_or_else(|| CodecError::malformed(payload, format!("bad announcement date '{}'", meeting.announcement_date)))?;

    let deadline = notification
        .vote
        .vote_deadline
        .or(notification.vote.vote_market_deadline)
        .ok_or_else(|| CodecError::malformed(payload, "notification carries no vote deadline"))?;
    let end = parse_deadline(&deadline.date)
        .ok_or_else(|| CodecError::malformed(payload, format!("bad vote deadline '{}'", deadline.date)))?;
    let end = Timestamp::from_millis(end.timestamp() * 1000).map_err(|err| CodecError::malformed(payload, err))?;

    let security = notification
        .securities
        .into_iter()
        .next()
        .map(|position| position.id.id.isin)
        .ok_or_else(|| CodecError::malformed(payload, "notification carries no security"))?;

    let questions = resolutions_to_questions(&notification.resolutions);

    Voting::new(
        meeting.meeting_id.clone(),
        format!("{}_{}", meeting_type.code(), meeting.meeting_id),
        Timestamp::from_date(announced),
        end,
        security,
        questions,
    )
    .map_err(|err| CodecError::malformed(payload, err))
}

/// Accepts `YYYY-MM-DD` optionally followed by a zone suffix (`Z`, `+03:00`).
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Accepts a zone-less date-time, an RFC 3339 date-time or a bare date.
fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        return Some(zoned.with_timezone(&Utc));
    }
    parse_date(value).and_then(|date| date.and_hms_opt(0, 0, 0)).map(|naive| naive.and_utc())
}
